pub mod contact;
pub mod growth;
pub mod home;
pub mod work;
