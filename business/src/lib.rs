pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod fetch_all;
        pub mod store;
        pub mod update;
    }
    pub mod session {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod navigation {
        pub mod guard;
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod model;
    }
    pub mod session {
        pub mod credentials;
        pub mod errors;
        pub mod login_state;
        pub mod storage;
    }
    pub mod shared {
        pub mod value_objects;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
