// src/layout/player_areas.rs
//! プレイヤーエリアのレイアウトソルバー本体。
//! 「一番大きく置ける振り分けを探す」のと「その振り分けの座標を確定する」の二段構え。

use itertools::chain;
use serde::{Deserialize, Serialize};

use crate::config::layout::{DELTA, MIN_SCALE, PLAYER_AREA_HEIGHT, PLAYER_AREA_WIDTH};
use crate::layout::arrangement::Arrangement;
use crate::layout::error::LayoutError;
use crate::layout::geometry::{Position, Rect, Viewport};

/// 確定したレイアウト。スケールと、各プレイヤーエリアの左上座標のリスト。
///
/// `areas` の順番は固定の回転順だよ:
/// - インデックス 0: 自分のエリア (右下の角)
/// - 続く `num_side` 個: 右の縦列を下から上へ
/// - 続く `num_top` 個: 上段を右から左へ
/// - 残り `num_side` 個: 左の縦列を上から下へ
///
/// 呼び出し側はインデックス `i` を `(自分の席順 + i) % num_players` の
/// プレイヤーに対応させる。ソルバー自身はプレイヤーの正体を知らない！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLayout {
    pub scale: f32,
    pub arrangement: Arrangement,
    pub areas: Vec<Position>,
}

impl PlayerLayout {
    /// スケール適用後のエリア幅
    pub fn scaled_width(&self) -> f32 {
        PLAYER_AREA_WIDTH * self.scale
    }

    /// スケール適用後のエリア高さ
    pub fn scaled_height(&self) -> f32 {
        PLAYER_AREA_HEIGHT * self.scale
    }

    /// `index` 番目のエリアを矩形として返すよ。当たり判定に便利！
    pub fn area_rect(&self, index: usize) -> Option<Rect> {
        self.areas.get(index).map(|area| {
            Rect::new(area.x, area.y, self.scaled_width(), self.scaled_height())
        })
    }
}

/// 画面にいちばん均等に見えるプレイヤーエリアの配置を探す関数だよ！
///
/// # 引数
/// * `num_players`: プレイヤー数 (自分を含む)。1 以上であること。
/// * `viewport`: レイアウト対象の描画領域。
///
/// # 戻り値
/// * `Ok(PlayerLayout)`: 最大スケールの配置。
/// * `Err(LayoutError)`: プレイヤー数が 0、またはどの候補も
///   `MIN_SCALE` に届かない場合。中途半端な結果は返さない！
///
/// # 処理の流れ
/// 1. `Arrangement::candidates` で候補の振り分けを列挙する。
/// 2. 候補ごとに `max_scale` を計算して、最大のものを選ぶ。
///    同率のときは列挙順で後の候補 (縦列が多い方) が勝つ。
/// 3. 勝った候補の座標を `find_player_areas_given_layout` で確定する。
pub fn find_player_areas(
    num_players: u32,
    viewport: &Viewport,
) -> Result<PlayerLayout, LayoutError> {
    if num_players < 1 {
        return Err(LayoutError::InvalidPlayerCount(num_players));
    }

    // max_by は同率のとき最後の要素を返す。つまり num_side が大きい候補の後勝ち。
    // この向きは配置の偏りを減らす好みとして決めてあるので変えないこと！
    let best = Arrangement::candidates(num_players)
        .map(|arrangement| (arrangement, arrangement.max_scale(viewport)))
        .filter(|(_, scale)| *scale >= MIN_SCALE)
        .max_by(|(_, a), (_, b)| a.total_cmp(b));

    match best {
        Some((arrangement, scale)) => {
            Ok(find_player_areas_given_layout(scale, arrangement, viewport))
        }
        None => Err(LayoutError::InfeasibleLayout {
            num_players,
            width: viewport.width,
            height: viewport.height,
        }),
    }
}

/// 選ばれた振り分けとスケールから、各エリアの左上座標を確定する関数。
///
/// 縦列は上下の余白も含めて `num_side + 1` 等分で均等に、
/// 上段は左右 `DELTA` を除いた幅を `num_top + 1` 等分で均等に空ける。
pub fn find_player_areas_given_layout(
    scale: f32,
    arrangement: Arrangement,
    viewport: &Viewport,
) -> PlayerLayout {
    let Viewport { width, height } = *viewport;
    let Arrangement { num_side, num_top } = arrangement;
    let scaled_width = PLAYER_AREA_WIDTH * scale;
    let scaled_height = PLAYER_AREA_HEIGHT * scale;

    let side_spacing =
        (height - (num_side as f32 + 1.0) * scaled_height) / (num_side as f32 + 1.0);
    let top_spacing =
        (width - 2.0 * DELTA - (num_top as f32 + 2.0) * scaled_width) / (num_top as f32 + 1.0);

    // 自分のエリア。右下の角から DELTA だけ内側。
    let anchor = Position {
        x: width - DELTA - scaled_width,
        y: height - DELTA - scaled_height,
    };

    // 右の縦列。回転順は下から上なので、並び位置は逆向きに数える。
    let right_column = (0..num_side).map(move |i| Position {
        x: width - scaled_width - DELTA,
        y: side_spacing + (scaled_height + side_spacing) * (num_side - i - 1) as f32,
    });

    // 上段。角の隣から右から左へ。
    let top_row = (0..num_top).map(move |i| Position {
        x: width - DELTA - scaled_width - (scaled_width + top_spacing) * (i + 1) as f32,
        y: DELTA,
    });

    // 左の縦列。上から下へ。
    let left_column = (0..num_side).map(move |i| Position {
        x: DELTA,
        y: side_spacing + (scaled_height + side_spacing) * i as f32,
    });

    let areas = chain!(std::iter::once(anchor), right_column, top_row, left_column).collect();

    PlayerLayout {
        scale,
        arrangement,
        areas,
    }
}
