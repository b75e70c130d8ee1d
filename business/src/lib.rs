pub mod application {
    pub mod admin {
        pub mod create_product;
        pub mod dashboard_stats;
        pub mod delete_product;
        pub mod update_product;
    }
    pub mod cart {
        pub mod add_item;
        pub mod apply_coupon;
        pub mod get_cart;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod finalize_payment;
        pub mod place_order;
    }
    pub mod notification {
        pub mod delete;
        pub mod get_inbox;
        pub mod hub;
        pub mod mark_all_as_read;
        pub mod mark_as_read;
    }
    pub mod order {
        pub mod cancel;
        pub mod get_all;
        pub mod get_by_id;
        pub mod refund;
        pub mod summary;
    }
    pub mod product {
        pub mod browse;
        pub mod get_by_id;
    }
    pub mod wishlist {
        pub mod add;
        pub mod get_all;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod admin {
        pub mod gateway;
        pub mod use_cases {
            pub mod create_product;
            pub mod dashboard_stats;
            pub mod delete_product;
            pub mod update_product;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod totals;
        pub mod use_cases {
            pub mod add_item;
            pub mod apply_coupon;
            pub mod get_cart;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod wizard;
        pub mod use_cases {
            pub mod finalize_payment;
            pub mod place_order;
        }
    }
    pub mod coupon {
        pub mod errors;
        pub mod gateway;
        pub mod model;
    }
    pub mod dashboard {
        pub mod aggregation;
        pub mod model;
    }
    pub mod notification {
        pub mod bus;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod read_state;
        pub mod use_cases {
            pub mod delete;
            pub mod get_inbox;
            pub mod mark_all_as_read;
            pub mod mark_as_read;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod cancel;
            pub mod get_all;
            pub mod get_by_id;
            pub mod refund;
            pub mod summary;
        }
    }
    pub mod product {
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod browse;
            pub mod get_by_id;
        }
    }
    pub mod session {
        pub mod store;
    }
    pub mod wishlist {
        pub mod gateway;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
        }
    }
}
