pub mod hashmap;
pub mod linked_list;
mod macros;
pub mod mode;

pub use hashmap::{
    ChainedMap, HashEntry, HashFunction, OpenAddressingMap, StringMap, hash_function_1,
    hash_function_2,
};
pub use linked_list::{List, Node};
pub use mode::{ModeError, find_mode};
