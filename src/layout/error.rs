// src/layout/error.rs
//! レイアウト計算の失敗を表すエラー型。

use thiserror::Error;

/// レイアウトが計算できない理由。
///
/// どれも入力 (設定や画面サイズ) の問題で、リトライしても結果は変わらない。
/// 呼び出し側はエラーをそのまま表示するか、入力を直すしかないよ。
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// プレイヤー数が 1 未満。レイアウトする対象がない。
    #[error("invalid player count: {0} (need at least 1)")]
    InvalidPlayerCount(u32),

    /// ビューポートの幅か高さが 0 以下。
    #[error("invalid viewport: {width}x{height} (both extents must be positive)")]
    InvalidViewport { width: f32, height: f32 },

    /// どの配置候補も最小スケールに届かなかった。
    /// ビューポートが小さすぎるか、プレイヤーが多すぎる。
    #[error("no feasible layout for {num_players} players in a {width}x{height} viewport")]
    InfeasibleLayout {
        num_players: u32,
        width: f32,
        height: f32,
    },
}
