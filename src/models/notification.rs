use std::fmt;

use super::{CatalogStatus, InventoryRecord, ScanOutcome};
use crate::error::AppResult;

/// Blocking alert shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_format() -> Self {
        Self::new(
            "Formato inválido",
            "O QR Code não contém um número de inventário válido.",
        )
    }

    pub fn not_found(inventory_number: &str) -> Self {
        Self::new(
            "Patrimônio não encontrado",
            format!(
                "Nenhum patrimônio corresponde ao inventário: {}",
                inventory_number
            ),
        )
    }

    pub fn catalog_unavailable(inventory_number: &str) -> Self {
        Self::new(
            "Catálogo indisponível",
            format!(
                "Não foi possível carregar os patrimônios; o inventário {} não pôde ser verificado.",
                inventory_number
            ),
        )
    }

    pub fn status_updated() -> Self {
        Self::new(
            "Sucesso",
            "Status do patrimônio atualizado para 'localizado'.",
        )
    }

    pub fn status_rejected() -> Self {
        Self::new(
            "Erro",
            "Não foi possível atualizar o status do patrimônio.",
        )
    }

    pub fn status_transport_error() -> Self {
        Self::new("Erro", "Ocorreu um erro ao tentar atualizar o status.")
    }

    /// Alert for a scan outcome. Matches are shown as [`RecordDetails`] instead.
    pub fn for_outcome(outcome: &ScanOutcome, catalog: CatalogStatus) -> Option<Self> {
        match outcome {
            ScanOutcome::InvalidFormat => Some(Self::invalid_format()),
            ScanOutcome::NotFound { inventory_number } => match catalog {
                CatalogStatus::Loaded => Some(Self::not_found(inventory_number)),
                CatalogStatus::Unavailable => Some(Self::catalog_unavailable(inventory_number)),
            },
            ScanOutcome::Matched(_) => None,
        }
    }

    pub fn for_status_update(result: &AppResult<()>) -> Self {
        match result {
            Ok(()) => Self::status_updated(),
            Err(e) if e.is_transport() => Self::status_transport_error(),
            Err(_) => Self::status_rejected(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}

/// Detail view of a matched record
pub struct RecordDetails<'a>(pub &'a InventoryRecord);

impl fmt::Display for RecordDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "Detalhes do Patrimônio")?;
        writeln!(f, "Número de Inventário: {}", record.inventory_number)?;
        writeln!(f, "Denominação: {}", record.denomination)?;
        writeln!(f, "Localização: {}", record.location)?;
        write!(f, "Sala: {}", record.room)?;
        if let Some(url) = record.image_url() {
            write!(f, "\nImagem: {}", url)?;
        }
        Ok(())
    }
}
