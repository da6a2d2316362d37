//! Schema bindings: one record type and one loader alias per snapshot file.
//!
//! | Loader                    | File                      | Index  |
//! |---------------------------|---------------------------|--------|
//! | [`NameBasicsLoader`]      | `name.basics.tsv.gz`      | flat   |
//! | [`TitleBasicsLoader`]     | `title.basics.tsv.gz`     | flat   |
//! | [`TitleAkaLoader`]        | `title.akas.tsv.gz`       | nested |
//! | [`TitleEpisodeLoader`]    | `title.episode.tsv.gz`    | flat   |
//! | [`TitlePrincipalsLoader`] | `title.principals.tsv.gz` | nested |
//! | [`TitleRatingsLoader`]    | `title.ratings.tsv.gz`    | flat   |

pub mod name_basics;
pub mod title_akas;
pub mod title_basics;
pub mod title_episode;
pub mod title_principals;
pub mod title_ratings;

pub use name_basics::{NameBasicsLoader, Person};
pub use title_akas::{TitleAka, TitleAkaLoader};
pub use title_basics::{GENRES, TITLE_TYPES, TitleBasics, TitleBasicsLoader};
pub use title_episode::{TitleEpisode, TitleEpisodeLoader};
pub use title_principals::{TitlePrincipal, TitlePrincipalsLoader};
pub use title_ratings::{TitleRating, TitleRatingsLoader};
