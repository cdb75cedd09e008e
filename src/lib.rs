pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod evolve;
            pub mod user;
        }
        pub mod application {
            pub mod errors;
            pub mod user_service;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod user_storage;
                pub mod user_storage_in_memory;
            }
        }
    }
}

pub mod shell;
