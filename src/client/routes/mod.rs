pub mod home;
pub mod loadout;
pub mod not_found;

pub use home::Home;
pub use loadout::PlayerLoadout;
pub use not_found::NotFound;
