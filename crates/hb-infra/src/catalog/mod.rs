pub mod http_source;
