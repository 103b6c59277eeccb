pub mod shared {
    pub mod application {
        pub mod errors;
        pub mod query_params;
    }
    pub mod inbound {
        pub mod extract;
        pub mod http_error;
    }
    pub mod infrastructure {
        pub mod project_catalog;
        pub mod project_store;
    }
}

pub mod modules {
    pub mod projects {
        pub mod core {
            pub mod indicator;
            pub mod project;
            pub mod sorting;
            pub mod time_slot;
            pub mod values;
        }
        pub mod use_cases {
            pub mod list_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_persisted_projects {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_project {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod toggle_project {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_project_indicators {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_project_values {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod export {
        pub mod core {
            pub mod aggregation;
            pub mod series;
        }
        pub mod use_cases {
            pub mod export_project_data {
                pub mod csv_export;
                pub mod handler;
                pub mod json_export;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
