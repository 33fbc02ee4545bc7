/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http::apply (全 route 共通), cors::apply / security_headers::apply (ブラウザ向け)
 */
pub mod cors;
pub mod http;
pub mod security_headers;
