pub mod gear_picker;
pub mod navbar;
pub mod page;
pub mod slot_grid;

pub use gear_picker::GearPicker;
pub use navbar::Navbar;
pub use page::Page;
pub use slot_grid::SlotGrid;
