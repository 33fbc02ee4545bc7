/*
 * Responsibility
 * - crate のモジュール構成
 * - tests/ から Router と store trait を使えるように公開する
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod state;
