//! Authentication service layer.
//!
//! Staff and members sign in with dashboard credentials that the remote guild API checks. The
//! remote token returned on login is kept in the session and used to re-validate the viewer.

pub mod login;
pub mod viewer;
