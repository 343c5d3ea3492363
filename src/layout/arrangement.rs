// src/layout/arrangement.rs
//! プレイヤーエリアをビューポートの縁にどう振り分けるかを表すモジュール。

use serde::{Deserialize, Serialize};

use crate::config::layout::{
    CENTER_RESERVE_HEIGHT_RATIO, CENTER_RESERVE_WIDTH_RATIO, DELTA, PLAYER_AREA_HEIGHT,
    PLAYER_AREA_WIDTH,
};
use crate::layout::geometry::Viewport;

/// 自分以外の `num_players - 1` エリアの振り分け方だよ。
///
/// `num_side` 個ずつを左右の縦列に、残り `num_top` 個を上段の横列に置く。
/// 自分のエリア (アンカー) は常に右下の角で、この数には入らない。
///
/// 不変条件: `num_top = num_players - 1 - 2 * num_side` で、
/// `candidates` が作る候補では `num_top` は負にならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    /// 片側の縦列に積むエリア数
    pub num_side: u32,
    /// 上段の横列に並べるエリア数
    pub num_top: u32,
}

impl Arrangement {
    /// `num_players` 人分の候補を列挙順に返すよ。
    ///
    /// `num_side` は 0 から `(num_players - 1) / 3` (整数除算) まで。
    /// この上限は縦列が横列に比べて偏りすぎないようにする見た目のヒューリスティックで、
    /// 幾何的に必要な制約ではない。
    pub fn candidates(num_players: u32) -> impl Iterator<Item = Arrangement> {
        let others = num_players - 1;
        (0..=others / 3).map(move |num_side| Arrangement {
            num_side,
            num_top: others - 2 * num_side,
        })
    }

    /// この振り分けでエリアがビューポートに収まる最大スケールを返す。
    ///
    /// 4 つの上限の最小値 (1.0 が天井):
    /// 1. 幅方向の中央確保: 中央にカードを並べる空きを残す
    /// 2. 高さ方向の中央確保: 同上
    /// 3. 上段 `num_top` 個 + 角のエリアがマージン込みで横に収まること
    /// 4. 縦列 `num_side` 個 + 角のエリアがマージン込みで縦に収まること
    ///
    /// ビューポートが小さいと負の値も返る。成立判定は呼び出し側の仕事。
    pub fn max_scale(&self, viewport: &Viewport) -> f32 {
        let Viewport { width, height } = *viewport;
        let num_top = self.num_top as f32;
        let num_side = self.num_side as f32;

        let mut scale: f32 = 1.0;
        scale = scale.min((width - 4.0 * DELTA) / CENTER_RESERVE_WIDTH_RATIO / PLAYER_AREA_WIDTH);
        scale =
            scale.min((height - 4.0 * DELTA) / CENTER_RESERVE_HEIGHT_RATIO / PLAYER_AREA_HEIGHT);
        scale = scale.min((width - (num_top + 3.0) * DELTA) / (num_top + 1.0) / PLAYER_AREA_WIDTH);
        scale = scale
            .min((height - (num_side + 2.0) * DELTA) / (num_side + 1.0) / PLAYER_AREA_HEIGHT);
        scale
    }
}
