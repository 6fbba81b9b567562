//! Single-threaded data structures. Callers that share one across threads
//! must wrap it in their own lock.

pub mod rbtree;
