pub mod finance;
pub mod kv;
pub mod report;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use finance::{
    FinanceBook, FinanceCategory, FinanceError, FinanceRecord, FinanceState, RecordDraft,
    CATEGORY_COLORS,
};
pub use kv::KeyValueStore;
pub use report::{CategoryFilter, CategoryTotal, Period};
