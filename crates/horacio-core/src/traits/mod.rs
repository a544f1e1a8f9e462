//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CharacterOrderBy, CharacterRepository, FindCharactersOptions, OrderDirection, RepoResult,
    UserRepository,
};
