pub mod add;
pub mod data;
pub mod delete;
pub mod edit;
pub mod list;
pub mod notify;
pub mod prefs;
pub mod profile;
pub mod stats;
pub mod status;
pub mod suggest;
