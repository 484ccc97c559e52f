//! Konane (Hawaiian checkers) core logic.
//!
//! このクレートは盤面・合法手生成・ゲーム進行を管理する `engine` と、
//! 手を選択する `ai`（αβ探索、ランダム）を提供します。
//! 端末 UI（`konane_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
