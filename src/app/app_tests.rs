// src/app/app_tests.rs
// wasm ターゲット専用の境界テスト！ `wasm-pack test` で実行するよ。
// JsValue を作る経路はブラウザ (か Node) の上でしか動かないから、
// ホスト側の `cargo test` ではこのファイルは空になる。
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use crate::app::game_area_app::GameAreaApp;

#[wasm_bindgen_test]
fn layout_json_roundtrips_through_jsvalue() {
    let mut app = GameAreaApp::new(4);
    app.update_viewport(800.0, 600.0).unwrap();

    let js = app.get_layout_json().expect("レイアウト JSON が取れるはず");
    let json = js.as_string().expect("JsValue は JSON 文字列のはず");
    assert!(json.contains("\"areas\""));
    assert!(json.contains("\"scale\""));
}

#[wasm_bindgen_test]
fn invalid_viewport_is_rejected_at_the_boundary() {
    let mut app = GameAreaApp::new(4);
    assert!(app.update_viewport(0.0, 600.0).is_err());
    // 拒否されたら未設定のままなので、レイアウト取得もエラー
    assert!(app.get_layout_json().is_err());
}

#[wasm_bindgen_test]
fn hit_test_finds_the_anchor_area() {
    let mut app = GameAreaApp::new(4);
    app.update_viewport(800.0, 600.0).unwrap();
    // 右下の角の少し内側は必ず自分のエリア
    assert_eq!(app.get_player_area_at(780.0, 580.0), Some(0));
    // マージンの中は空振り
    assert_eq!(app.get_player_area_at(2.0, 2.0), None);
}
