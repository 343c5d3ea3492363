// src/app/game_area_app.rs

// --- 必要なものをインポート ---
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use js_sys::Error;
use serde::Serialize;
use web_sys::DomRect;

use crate::app::{event_handler, layout_calculator};
use crate::layout::{find_player_areas, PlayerLayout, Viewport};
use crate::log; // lib.rs の console.log ラッパーを使う
use crate::protocol::{AreaInfoData, LayoutData, TableLayoutData, TargetLineData};

// --- ゲームエリア全体のレイアウト状態を管理する構造体 ---
//
// JS 側 (描画レイヤー) はこれを 1 個作って持っておいて、
// リサイズやプレイヤー数の変化のたびに viewport を入れ直しては
// get_layout_json() を呼び直す、という使い方をするよ。
// 計算は毎回やり直し。探索はプレイヤー数に比例する程度だから余裕で軽い！
#[wasm_bindgen]
pub struct GameAreaApp {
    num_players: u32,
    viewport: Option<Viewport>,
}

#[wasm_bindgen]
impl GameAreaApp {
    #[wasm_bindgen(constructor)]
    pub fn new(num_players: u32) -> Self {
        println!("GameAreaApp: 初期化 ({} 人)", num_players);
        Self {
            num_players,
            viewport: None,
        }
    }

    /// プレイヤー数を変更する。次の get_layout_json() から反映されるよ。
    #[wasm_bindgen]
    pub fn set_num_players(&mut self, num_players: u32) {
        self.num_players = num_players;
    }

    /// ビューポートの寸法を直接渡して更新する。
    /// 0 以下の寸法はここで弾く。古いビューポートは保持したままにするよ。
    #[wasm_bindgen]
    pub fn update_viewport(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        match Viewport::new(width, height) {
            Ok(viewport) => {
                self.viewport = Some(viewport);
                Ok(())
            }
            Err(e) => {
                log(&format!("GameAreaApp: ビューポート更新を拒否: {}", e));
                Err(JsValue::from(Error::new(&e.to_string())))
            }
        }
    }

    /// getBoundingClientRect() の結果をそのまま渡して更新するバージョン。
    #[wasm_bindgen]
    pub fn update_viewport_rect(&mut self, rect: &DomRect) -> Result<(), JsValue> {
        self.update_viewport(rect.width() as f32, rect.height() as f32)
    }

    /// 現在の入力でレイアウトを解いて、JSON (JsValue の文字列) で返す関数だよ！
    ///
    /// # 戻り値
    /// - `Ok(JsValue)`: `LayoutData` の JSON。成功！🎉
    /// - `Err(JsValue)`: ビューポート未設定、またはレイアウトが成立しない場合。
    ///   中途半端なレイアウトは絶対に返さない。失敗は失敗！
    #[wasm_bindgen]
    pub fn get_layout_json(&self) -> Result<JsValue, JsValue> {
        to_json_js(&self.layout_data().map_err(into_js_error)?)
    }

    /// 回転順 `area_index` 番のエリアに置く情報オブジェクト
    /// (体力マーカー、役職マーク、手札スタブ) の矩形を JSON で返す。
    #[wasm_bindgen]
    pub fn get_area_info_json(
        &self,
        area_index: usize,
        max_health: u32,
    ) -> Result<JsValue, JsValue> {
        to_json_js(
            &self
                .area_info_data(area_index, max_health)
                .map_err(into_js_error)?,
        )
    }

    /// 中央テーブルと自分の領域のオブジェクト配置を JSON で返す。
    /// 引数は「いま何個あるか」だけ。中身が何かはこっちは知らない！
    #[wasm_bindgen]
    pub fn get_table_layout_json(
        &self,
        num_discards: usize,
        num_choices: usize,
        my_hand_len: usize,
    ) -> Result<JsValue, JsValue> {
        to_json_js(
            &self
                .table_layout_data(num_discards, num_choices, my_hand_len)
                .map_err(into_js_error)?,
        )
    }

    /// ターゲット線 1 本 (エリア中心からエリア中心) を JSON で返す。
    #[wasm_bindgen]
    pub fn get_target_line_json(&self, from: usize, to: usize) -> Result<JsValue, JsValue> {
        to_json_js(&self.target_line_data(from, to).map_err(into_js_error)?)
    }

    /// クリック座標がどのプレイヤーエリアに当たったかを返す。
    /// JS 側はこのインデックスを席順に回して「誰がクリックされたか」にするよ。
    ///
    /// # 戻り値
    /// * `Some(index)`: 回転順のエリア番号。JS では number | undefined で受かる！
    /// * `None`: エリアの外、またはレイアウトが解けない状態。
    #[wasm_bindgen]
    pub fn get_player_area_at(&self, x: f32, y: f32) -> Option<usize> {
        let layout = self.solved_layout().ok()?;
        event_handler::find_clicked_player_area(&layout, x, y)
    }

    /// クリック座標が自分の手札の何枚目に当たったかを返す。
    /// 手札はエリアより手前に描画されるから、両方当たるときはこっちが優先。
    #[wasm_bindgen]
    pub fn get_hand_card_at(&self, x: f32, y: f32, hand_len: usize) -> Option<usize> {
        let viewport = self.viewport?;
        let layout = self.solved_layout().ok()?;
        event_handler::find_clicked_hand_card(&layout, &viewport, hand_len, x, y)
    }
}

// --- 内部ロジック (JsValue を触らないので普通のテストで叩ける) ---
impl GameAreaApp {
    fn current_viewport(&self) -> Result<Viewport, String> {
        self.viewport
            .ok_or_else(|| "viewport is not set yet (call update_viewport first)".to_string())
    }

    pub(crate) fn solved_layout(&self) -> Result<PlayerLayout, String> {
        let viewport = self.current_viewport()?;
        find_player_areas(self.num_players, &viewport).map_err(|e| e.to_string())
    }

    pub(crate) fn layout_data(&self) -> Result<LayoutData, String> {
        Ok(LayoutData::from(&self.solved_layout()?))
    }

    pub(crate) fn area_info_data(
        &self,
        area_index: usize,
        max_health: u32,
    ) -> Result<AreaInfoData, String> {
        let layout = self.solved_layout()?;
        let area = layout
            .areas
            .get(area_index)
            .copied()
            .ok_or_else(|| format!("area index {} is out of range", area_index))?;
        Ok(AreaInfoData {
            healths: layout_calculator::health_marker_rects(&area, layout.scale, max_health)
                .into_iter()
                .map(Into::into)
                .collect(),
            role: layout_calculator::role_marker_rect(&area, layout.scale).into(),
            hand_back: layout_calculator::hand_back_rect(&area, layout.scale).into(),
        })
    }

    pub(crate) fn table_layout_data(
        &self,
        num_discards: usize,
        num_choices: usize,
        my_hand_len: usize,
    ) -> Result<TableLayoutData, String> {
        let viewport = self.current_viewport()?;
        let layout = self.solved_layout()?;
        let scale = layout.scale;
        Ok(TableLayoutData {
            discards: layout_calculator::discard_row_rects(num_discards, &viewport, scale)
                .into_iter()
                .map(Into::into)
                .collect(),
            choices: layout_calculator::choice_row_rects(num_choices, &viewport, scale)
                .into_iter()
                .map(Into::into)
                .collect(),
            hand: layout_calculator::hand_row_rects(my_hand_len, &viewport, scale)
                .into_iter()
                .map(Into::into)
                .collect(),
            action_button: layout_calculator::action_button_rect(&viewport, scale).into(),
            my_region_height: layout_calculator::my_region_height(scale),
        })
    }

    pub(crate) fn target_line_data(&self, from: usize, to: usize) -> Result<TargetLineData, String> {
        let layout = self.solved_layout()?;
        layout_calculator::target_line(&layout, from, to)
            .map(Into::into)
            .ok_or_else(|| format!("target line {} -> {} is out of range", from, to))
    }
}

// --- JsValue まわりの小さなヘルパー ---

/// serde_json で文字列にして JsValue に包む。JS 側は JSON.parse して使うよ。
fn to_json_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    match serde_json::to_string(value) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            log(&format!("GameAreaApp: JSON 変換に失敗: {}", e));
            Err(JsValue::from(Error::new(&format!(
                "failed to serialize layout data: {}",
                e
            ))))
        }
    }
}

fn into_js_error(message: String) -> JsValue {
    JsValue::from(Error::new(&message))
}

// --- テスト (JsValue を作らない経路だけ。境界そのものは app_tests.rs で) ---
#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GameAreaApp {
        let mut app = GameAreaApp {
            num_players: 4,
            viewport: None,
        };
        app.viewport = Some(Viewport::new(800.0, 600.0).unwrap());
        app
    }

    #[test]
    fn test_layout_data_has_one_area_per_player() {
        let app = app();
        let data = app.layout_data().unwrap();
        assert_eq!(data.areas.len(), 4);
        assert!(data.scale > 0.0);
        assert_eq!(data.num_side, 1);
        assert_eq!(data.num_top, 1);
    }

    #[test]
    fn test_missing_viewport_is_an_error() {
        let app = GameAreaApp {
            num_players: 4,
            viewport: None,
        };
        let result = app.layout_data();
        assert!(result.is_err());
        assert!(
            result.unwrap_err().contains("viewport"),
            "どのビューポートも設定してないのが原因だと分かるメッセージのはず"
        );
    }

    #[test]
    fn test_infeasible_viewport_is_an_error_not_a_layout() {
        let mut app = app();
        app.num_players = 7;
        app.viewport = Some(Viewport::new(10.0, 10.0).unwrap());
        assert!(app.layout_data().is_err());
    }

    #[test]
    fn test_area_info_for_anchor_area() {
        let app = app();
        let info = app.area_info_data(0, 4).unwrap();
        assert_eq!(info.healths.len(), 4);

        let layout = app.solved_layout().unwrap();
        let anchor = layout.areas[0];
        // 役職マークはエリアの内側 (右上) に収まってるはず
        assert!(info.role.x > anchor.x);
        assert!(info.role.x + info.role.width < anchor.x + layout.scaled_width());

        // 範囲外のエリア番号はエラー
        assert!(app.area_info_data(4, 4).is_err());
    }

    #[test]
    fn test_table_layout_counts() {
        let app = app();
        let table = app.table_layout_data(2, 3, 5).unwrap();
        assert_eq!(table.discards.len(), 2);
        assert_eq!(table.choices.len(), 3);
        assert_eq!(table.hand.len(), 5);
        assert!(table.my_region_height > 0.0);
    }

    #[test]
    fn test_target_line_between_players() {
        let app = app();
        assert!(app.target_line_data(0, 2).is_ok());
        assert!(app.target_line_data(0, 9).is_err());
    }
}
