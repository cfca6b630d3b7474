pub mod simple_paths;

pub use self::simple_paths::{
    all_simple_paths, count_simple_paths, effective_cutoff,
    try_all_simple_paths, MultiEdgePaths, PathsError, SimpleEdgePaths,
    SimplePaths,
};
