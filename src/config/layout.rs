// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! プレイヤーエリアのサイズ、余白、中央エリアの確保比率など。

/// プレイヤーエリアのテンプレート幅 (スケール 1.0 のとき)
pub const PLAYER_AREA_WIDTH: f32 = 200.0;
/// プレイヤーエリアのテンプレート高さ (スケール 1.0 のとき)
pub const PLAYER_AREA_HEIGHT: f32 = 300.0;

/// オブジェクト間の標準マージン
pub const DELTA: f32 = 10.0;

/// エリア内部の情報オブジェクト (役職マーク、手札スタブなど) とエリア枠との余白
pub const INFO_DELTA: f32 = 4.0;

/// レイアウトとして成立する最小スケール。
/// どの候補もこれに届かない場合、そのビューポートにはレイアウトが存在しない扱い。
pub const MIN_SCALE: f32 = 0.1;

// --- 中央プレイエリアの確保 ---
// ビューポートの幅と高さをこの比率で割った分までしかエリアを大きくしない。
// 中央にカードを並べる空きを残すための経験値で、幾何的な導出はない。
pub const CENTER_RESERVE_WIDTH_RATIO: f32 = 6.0;
pub const CENTER_RESERVE_HEIGHT_RATIO: f32 = 3.5;

// --- エリア内の情報オブジェクト ---

/// 役職マークのサイズ比 (エリアサイズに対する割合)。エリア右上に置く。
pub const ROLE_RATIO: f32 = 0.25;
/// 相手の手札スタブ (裏向きカードと枚数ラベル) のサイズ比。エリア左下に置く。
pub const CARD_RATIO: f32 = 0.3;

// 体力マーカーの並び。j 番目のマーカーは
// x = エリア幅 * (0.23 + j * 0.06) の位置に置く。
pub const HEALTH_X_START_RATIO: f32 = 0.23;
pub const HEALTH_X_STEP_RATIO: f32 = 0.06;
pub const HEALTH_Y_RATIO: f32 = 0.01;
pub const HEALTH_WIDTH_RATIO: f32 = 0.06;
pub const HEALTH_HEIGHT_RATIO: f32 = 0.05;

// --- 中央テーブルのオブジェクト ---

/// 捨て札カードのサイズ比 (プレイヤーエリアに対する割合)
pub const DISCARD_RATIO: f32 = 0.7;
/// 完全に表示する捨て札の最大枚数。これを超えた 1 枚はスライドアウト中の扱い。
pub const MAX_DISCARDS_SHOWN: usize = 4;

/// アクションボタンのサイズ (ピクセル固定。スケールしない)
pub const ACTION_BUTTON_WIDTH: f32 = 160.0;
pub const ACTION_BUTTON_HEIGHT: f32 = 30.0;
