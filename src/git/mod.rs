//! Git collaborator invocations
//!
//! The underlying contract is the git CLI: `rev-list` for enumerating the
//! full reachable history and `grep` for searching one commit's tree. Both
//! are classified on exit status, never on error text.

/// Per-commit tree search via `git grep`
pub mod grep;
/// Full-history commit enumeration via `git rev-list`
pub mod rev_list;

pub use grep::grep_commit;
pub use rev_list::list_all_commits;
