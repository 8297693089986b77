mod category;
mod hits;
mod kind;
mod results;

pub use category::Category;
pub use hits::{Location, ManualHit, ModuleHit, SymbolHit};
pub use kind::{KindFilters, SymbolKind};
pub use results::{HitRef, PagedResults, ResultBag, Section};
