mod city;
mod country;
mod region;
mod state;

use std::collections::BTreeMap;

pub use city::City;
pub use country::Country;
pub use region::Region;
pub use state::State;

/// Language code → localized name
pub type Translations = BTreeMap<String, String>;
