// src/app/event_handler.rs
//! クリック座標から「何がクリックされたか」を特定するロジック。
//! レイアウトは解けている前提で、座標をレイアウト上の要素に引き戻すだけ。
//! どのプレイヤーに対応するかの変換 (席順の回転) は呼び出し側の仕事だよ。

use log::debug;

use crate::app::layout_calculator;
use crate::layout::{PlayerLayout, Viewport};

/// クリックされた要素の種類を表す Enum だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 自分の手札のカードがクリックされた場合。何枚目か (0 始まり) を保持するよ。
    HandCard(usize),
    /// プレイヤーエリアがクリックされた場合。回転順のインデックスを保持するよ。
    PlayerArea(usize),
}

/// クリックされた座標 (x, y) に基づいて、どの要素がクリックされたかを特定する関数。
///
/// # 引数
/// * `layout`: 解けているプレイヤーエリアのレイアウト。
/// * `viewport`: レイアウトを解いたときと同じビューポート。
/// * `hand_len`: 自分の手札の枚数。手札の矩形を再現するのに必要。
/// * `x`, `y`: クリックされた画面上の座標。
///
/// # 戻り値
/// * `Some(ClickTarget::HandCard(i))`: 手札 `i` 枚目。
/// * `Some(ClickTarget::PlayerArea(i))`: 回転順 `i` 番のエリア。
/// * `None`: 何もない場所 (背景、マージン、中央エリア)。
///
/// 手札はエリアより手前に描画されるから、判定も手札が先！
pub fn find_clicked_element(
    layout: &PlayerLayout,
    viewport: &Viewport,
    hand_len: usize,
    x: f32,
    y: f32,
) -> Option<ClickTarget> {
    if let Some(card) = find_clicked_hand_card(layout, viewport, hand_len, x, y) {
        debug!("click ({}, {}) hit hand card {}", x, y, card);
        return Some(ClickTarget::HandCard(card));
    }
    if let Some(area) = find_clicked_player_area(layout, x, y) {
        debug!("click ({}, {}) hit player area {}", x, y, area);
        return Some(ClickTarget::PlayerArea(area));
    }
    debug!("click ({}, {}) hit nothing", x, y);
    None
}

/// 座標がどのプレイヤーエリアに入っているかを探すヘルパー。
/// エリアは重ならないので、最初にヒットしたものを返せばOK。
pub fn find_clicked_player_area(layout: &PlayerLayout, x: f32, y: f32) -> Option<usize> {
    (0..layout.areas.len())
        .find(|&i| layout.area_rect(i).map_or(false, |rect| rect.contains(x, y)))
}

/// 座標が自分の手札のどのカードに入っているかを探すヘルパー。
/// 手札同士も間隔を空けて並ぶので重なりは気にしなくていい。
pub fn find_clicked_hand_card(
    layout: &PlayerLayout,
    viewport: &Viewport,
    hand_len: usize,
    x: f32,
    y: f32,
) -> Option<usize> {
    layout_calculator::hand_row_rects(hand_len, viewport, layout.scale)
        .iter()
        .position(|rect| rect.contains(x, y))
}
