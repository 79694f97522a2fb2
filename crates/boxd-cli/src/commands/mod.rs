pub mod dispatch;
pub mod list;
pub mod profile;
pub mod review;
pub mod shared;
pub mod sync;
pub mod top;
pub mod whoami;
