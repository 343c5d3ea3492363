// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod config;
pub mod layout;
pub mod protocol; // JS 側へ渡すデータ形式を protocol モジュールに置いてるよ

// 使う側 (と JS バインディング) がよく触る型をルートから再エクスポート！
pub use app::game_area_app::GameAreaApp;
pub use layout::{
    find_player_areas, find_player_areas_given_layout, Arrangement, LayoutError, PlayerLayout,
    Position, Rect, Viewport,
};

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックしたときにスタックトレースが console に出るようになる。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
