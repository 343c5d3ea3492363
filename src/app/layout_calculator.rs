// src/app/layout_calculator.rs
//! 解けたレイアウトを土台に、画面に出す各オブジェクトの描画位置を計算するよ。
//! 体力マーカー、役職マーク、手札スタブ、捨て札の列、中央の選択肢、自分の手札など。
//! 全部ただの座標計算で、描画そのものは JS 側の仕事！

use serde::{Deserialize, Serialize};

use crate::config::layout::{
    ACTION_BUTTON_HEIGHT, ACTION_BUTTON_WIDTH, CARD_RATIO, DELTA, DISCARD_RATIO,
    HEALTH_HEIGHT_RATIO, HEALTH_WIDTH_RATIO, HEALTH_X_START_RATIO, HEALTH_X_STEP_RATIO,
    HEALTH_Y_RATIO, INFO_DELTA, MAX_DISCARDS_SHOWN, PLAYER_AREA_HEIGHT, PLAYER_AREA_WIDTH,
    ROLE_RATIO,
};
use crate::layout::{PlayerLayout, Position, Rect, Viewport};

/// あるプレイヤーから別のプレイヤーへのターゲット線。エリア中心からエリア中心へ引く。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetLine {
    pub start: Position,
    pub end: Position,
}

/// 体力マーカーの矩形を左から順に返す。
/// j 番目はエリア幅の `0.23 + j * 0.06` の位置。最大体力が多いと右へ伸びていく。
pub fn health_marker_rects(area: &Position, scale: f32, max_health: u32) -> Vec<Rect> {
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    (0..max_health)
        .map(|j| {
            Rect::new(
                area.x + scaled_width * (HEALTH_X_START_RATIO + j as f32 * HEALTH_X_STEP_RATIO),
                area.y + scaled_height * HEALTH_Y_RATIO,
                scaled_width * HEALTH_WIDTH_RATIO,
                scaled_height * HEALTH_HEIGHT_RATIO,
            )
        })
        .collect()
}

/// 役職マークの矩形。エリアの右上に INFO_DELTA だけ内側へ寄せて置く。
pub fn role_marker_rect(area: &Position, scale: f32) -> Rect {
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    Rect::new(
        area.x + (1.0 - ROLE_RATIO) * scaled_width - INFO_DELTA,
        area.y + INFO_DELTA,
        scaled_width * ROLE_RATIO,
        scaled_height * ROLE_RATIO,
    )
}

/// 相手の手札スタブ (裏向きカード + 枚数ラベル) の矩形。エリアの左下。
pub fn hand_back_rect(area: &Position, scale: f32) -> Rect {
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    Rect::new(
        area.x + INFO_DELTA,
        area.y + (1.0 - CARD_RATIO) * scaled_height - INFO_DELTA,
        scaled_width * CARD_RATIO,
        scaled_height * CARD_RATIO,
    )
}

/// 捨て札の列の矩形を新しい順に返すよ。画面中央に横並び。
///
/// 完全に表示するのは `MAX_DISCARDS_SHOWN` 枚まで。捨て札がそれより多いときは
/// もう 1 枠だけ返していて、最後の枠 (インデックス `MAX_DISCARDS_SHOWN`) は
/// 画面から消えていく途中のカードの置き場。中央寄せの計算には入れない。
pub fn discard_row_rects(num_discards: usize, viewport: &Viewport, scale: f32) -> Vec<Rect> {
    if num_discards == 0 {
        return Vec::new();
    }
    let card_width = PLAYER_AREA_WIDTH * scale * DISCARD_RATIO;
    let card_height = PLAYER_AREA_HEIGHT * scale * DISCARD_RATIO;
    let num_shown = num_discards.min(MAX_DISCARDS_SHOWN);
    let start_x = (viewport.width
        - num_shown as f32 * card_width
        - (num_shown as f32 - 1.0) * DELTA)
        / 2.0;
    let y = (viewport.height - card_height) / 2.0;

    (0..num_discards.min(MAX_DISCARDS_SHOWN + 1))
        .map(|i| Rect::new(start_x + (card_width + DELTA) * i as f32, y, card_width, card_height))
        .collect()
}

/// キャラクター選択肢の列。フルサイズのエリアを画面のド真ん中に横並びで。
pub fn choice_row_rects(num_choices: usize, viewport: &Viewport, scale: f32) -> Vec<Rect> {
    if num_choices == 0 {
        return Vec::new();
    }
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    let start_x = (viewport.width
        - num_choices as f32 * scaled_width
        - (num_choices as f32 - 1.0) * DELTA)
        / 2.0;
    let y = (viewport.height - scaled_height) / 2.0;

    (0..num_choices)
        .map(|i| {
            Rect::new(
                start_x + (scaled_width + DELTA) * i as f32,
                y,
                scaled_width,
                scaled_height,
            )
        })
        .collect()
}

/// 自分の手札の列。画面の下端に左から並べる。
pub fn hand_row_rects(num_cards: usize, viewport: &Viewport, scale: f32) -> Vec<Rect> {
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    (0..num_cards)
        .map(|i| {
            Rect::new(
                (scaled_width + DELTA) * i as f32,
                viewport.height - scaled_height - DELTA,
                scaled_width,
                scaled_height,
            )
        })
        .collect()
}

/// 画面下端の「自分の領域」の帯の高さ。手札 1 枚分 + 上下のマージン。
pub fn my_region_height(scale: f32) -> f32 {
    PLAYER_AREA_HEIGHT * scale + 2.0 * DELTA
}

/// アクションボタン (ターン終了など) の矩形。
/// サイズはピクセル固定で、自分の手札のすぐ上に中央寄せ。
pub fn action_button_rect(viewport: &Viewport, scale: f32) -> Rect {
    let scaled_height = PLAYER_AREA_HEIGHT * scale;
    Rect::new(
        (viewport.width - ACTION_BUTTON_WIDTH) / 2.0,
        viewport.height - scaled_height - ACTION_BUTTON_HEIGHT - 3.0 * DELTA,
        ACTION_BUTTON_WIDTH,
        ACTION_BUTTON_HEIGHT,
    )
}

/// `from` のエリア中心から `to` のエリア中心へのターゲット線を返す。
/// どちらかのインデックスが範囲外なら None。
pub fn target_line(layout: &PlayerLayout, from: usize, to: usize) -> Option<TargetLine> {
    let start = layout.area_rect(from)?.center();
    let end = layout.area_rect(to)?.center();
    Some(TargetLine { start, end })
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{find_player_areas, Viewport};

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    /// 比率をかけた f32 はビットまでは合わないので、近似で比べるヘルパー。
    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "{} になるはずが {} だった",
            expected,
            actual
        );
    }

    #[test]
    fn test_health_markers_line_up() {
        let area = Position { x: 100.0, y: 50.0 };
        let markers = health_marker_rects(&area, 0.5, 4);
        assert_eq!(markers.len(), 4);
        // scale 0.5 ならエリアは 100x150。最初のマーカーは幅の 23% の位置。
        assert_close(markers[0].x, 123.0);
        assert_close(markers[0].y, 51.5);
        assert_close(markers[0].width, 6.0);
        assert_close(markers[0].height, 7.5);
        // 隣のマーカーとは幅の 6% ずつ離れる
        assert_close(markers[1].x - markers[0].x, 6.0);
    }

    #[test]
    fn test_role_marker_in_top_right_corner() {
        let area = Position { x: 100.0, y: 50.0 };
        let role = role_marker_rect(&area, 0.5);
        assert_eq!(role.x, 171.0); // 100 + 75% * 100 - 4
        assert_eq!(role.y, 54.0);
        assert_eq!(role.width, 25.0);
        assert_eq!(role.height, 37.5);
    }

    #[test]
    fn test_hand_back_in_bottom_left_corner() {
        let area = Position { x: 100.0, y: 50.0 };
        let stub = hand_back_rect(&area, 0.5);
        assert_eq!(stub.x, 104.0);
        assert_close(stub.y, 151.0); // 50 + 70% * 150 - 4
        assert_close(stub.width, 30.0);
        assert_close(stub.height, 45.0);
    }

    #[test]
    fn test_discard_row_is_centered() {
        let viewport = vp();
        let rects = discard_row_rects(3, &viewport, 0.5);
        assert_eq!(rects.len(), 3);
        // 3 枚 (70 幅) + 間隔 2 つで 230。左右に (800 - 230) / 2 = 285 ずつ残るはず。
        assert_eq!(rects[0].x, 285.0);
        assert_eq!(rects[2].x, 445.0);
        let left_gap = rects[0].x;
        let right_gap = viewport.width - (rects[2].x + rects[2].width);
        assert!((left_gap - right_gap).abs() < 1e-4, "左右の余白が揃ってるはず");
        // 縦は中央
        assert_eq!(rects[0].y, (600.0 - 105.0) / 2.0);
    }

    #[test]
    fn test_discard_row_keeps_one_outgoing_slot() {
        let viewport = vp();
        assert!(discard_row_rects(0, &viewport, 0.5).is_empty());
        // 完全表示は 4 枚まで。あふれたら出ていく途中の 1 枠だけ追加で返す。
        assert_eq!(discard_row_rects(4, &viewport, 0.5).len(), 4);
        assert_eq!(discard_row_rects(5, &viewport, 0.5).len(), 5);
        assert_eq!(discard_row_rects(20, &viewport, 0.5).len(), 5);
        // 中央寄せは 4 枚分のまま。5 枠目は右へはみ出す側。
        let four = discard_row_rects(4, &viewport, 0.5);
        let many = discard_row_rects(20, &viewport, 0.5);
        assert_eq!(four[0].x, many[0].x);
    }

    #[test]
    fn test_choice_row_is_centered() {
        let viewport = vp();
        let rects = choice_row_rects(3, &viewport, 0.5);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].x, 240.0); // (800 - 3*100 - 2*10) / 2
        assert_eq!(rects[0].y, 225.0); // (600 - 150) / 2
        assert_eq!(rects[1].x, 350.0);
    }

    #[test]
    fn test_hand_row_starts_at_left_edge() {
        let viewport = vp();
        let rects = hand_row_rects(2, &viewport, 0.5);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[0].y, 440.0); // 600 - 150 - 10
        assert_eq!(rects[1].x, 110.0);
    }

    #[test]
    fn test_action_button_sits_above_hand_row() {
        let viewport = vp();
        let button = action_button_rect(&viewport, 0.5);
        assert_eq!(button.x, 320.0); // (800 - 160) / 2
        assert_eq!(button.y, 600.0 - 150.0 - 30.0 - 30.0);
        assert_eq!(button.width, 160.0);
        assert_eq!(button.height, 30.0);
    }

    #[test]
    fn test_my_region_height() {
        assert_eq!(my_region_height(0.5), 170.0);
    }

    #[test]
    fn test_target_line_connects_area_centers() {
        let viewport = vp();
        let layout = find_player_areas(2, &viewport).unwrap();
        let line = target_line(&layout, 0, 1).unwrap();
        let from = layout.area_rect(0).unwrap();
        assert_eq!(line.start.x, from.x + from.width / 2.0);
        assert_eq!(line.start.y, from.y + from.height / 2.0);

        // 範囲外は None！
        assert!(target_line(&layout, 0, 2).is_none());
    }
}
