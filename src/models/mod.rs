pub mod inventory_record;
pub mod notification;
pub mod scan_outcome;

pub use inventory_record::*;
pub use notification::*;
pub use scan_outcome::*;
