pub mod middleware_current_user;
