pub mod category;
pub mod garment;
pub mod session;
pub mod variant;

pub use category::Category;
pub use garment::Garment;
pub use session::{Role, RoleDto};
pub use variant::{StockDirection, Variant};
