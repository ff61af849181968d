pub mod loading;
pub mod skills;
