//! Filesystem locations used by the classifier.

pub mod xdg_root;
