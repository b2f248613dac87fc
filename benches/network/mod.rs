pub mod application {
    pub mod http {
        pub mod client;
    }
}
