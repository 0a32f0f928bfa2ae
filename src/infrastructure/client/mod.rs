mod http_export_client;

pub use http_export_client::HttpExportClient;
