// src/protocol.rs

// このファイルは、WASM 側から JavaScript の描画レイヤーへ渡すデータの
// 形式を定義するよ！💌 レイアウトの計算結果をそのまま JSON にして渡して、
// JS 側は受け取った座標に要素を置くだけ、という役割分担。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::app::layout_calculator::TargetLine;
use crate::layout::{PlayerLayout, Position, Rect};

/// 座標ひとつ分のデータ。JS 側では style の left / top にそのまま入る。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PositionData {
    pub x: f32,
    pub y: f32,
}

impl From<Position> for PositionData {
    fn from(position: Position) -> Self {
        Self { x: position.x, y: position.y }
    }
}

/// 矩形ひとつ分のデータ。left / top / width / height がそのまま揃う。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RectData {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Rect> for RectData {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// 解けたレイアウト全体。
/// `areas` は回転順 (自分が 0 番) で、JS 側は
/// `(自分の席順 + i) % numPlayers` でプレイヤーに割り当てる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutData {
    pub scale: f32,
    pub num_side: u32,
    pub num_top: u32,
    pub scaled_width: f32,
    pub scaled_height: f32,
    pub areas: Vec<PositionData>,
}

impl From<&PlayerLayout> for LayoutData {
    fn from(layout: &PlayerLayout) -> Self {
        Self {
            scale: layout.scale,
            num_side: layout.arrangement.num_side,
            num_top: layout.arrangement.num_top,
            scaled_width: layout.scaled_width(),
            scaled_height: layout.scaled_height(),
            areas: layout.areas.iter().map(|&area| area.into()).collect(),
        }
    }
}

/// 1 つのプレイヤーエリアの中に置く情報オブジェクトたち。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AreaInfoData {
    /// 体力マーカー。左から max_health 個。
    pub healths: Vec<RectData>,
    /// 役職マーク (エリア右上)
    pub role: RectData,
    /// 手札スタブ (エリア左下)。枚数ラベルも同じ矩形に重ねる。
    pub hand_back: RectData,
}

/// 中央テーブルと自分の領域に置くオブジェクトたち。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableLayoutData {
    /// 捨て札の列 (新しい順)。最後の 1 枠はスライドアウト中の置き場のことがある。
    pub discards: Vec<RectData>,
    /// キャラクター選択肢の列 (中央)
    pub choices: Vec<RectData>,
    /// 自分の手札の列 (下端)
    pub hand: Vec<RectData>,
    /// アクションボタン
    pub action_button: RectData,
    /// 画面下端の自分の領域の帯の高さ
    pub my_region_height: f32,
}

/// ターゲット線 1 本分のデータ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TargetLineData {
    pub start: PositionData,
    pub end: PositionData,
}

impl From<TargetLine> for TargetLineData {
    fn from(line: TargetLine) -> Self {
        Self {
            start: line.start.into(),
            end: line.end.into(),
        }
    }
}
