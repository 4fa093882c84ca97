//! Database entities

pub mod hero;
pub mod hero_mission_link;
pub mod mission;
pub mod team;

pub use hero::Entity as Hero;
pub use hero_mission_link::Entity as HeroMissionLink;
pub use mission::Entity as Mission;
pub use team::Entity as Team;

pub mod prelude {
    pub use super::hero::Entity as Hero;
    pub use super::hero_mission_link::Entity as HeroMissionLink;
    pub use super::mission::Entity as Mission;
    pub use super::team::Entity as Team;
}
