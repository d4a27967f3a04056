pub mod google_auth_service;
