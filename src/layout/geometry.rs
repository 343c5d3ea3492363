// src/layout/geometry.rs

// serde を使う宣言！座標や矩形は JSON にして JS 側へ渡すからね！
use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;

/// 2D空間での位置を表す型だよ！ (x, y) はオブジェクトの左上座標。📍
///
/// プレイヤーエリアだったり、体力マーカーだったり、
/// いろんなオブジェクトの置き場所をこれで表すよ。
///
/// 座標の型は `f32`。ピクセルでも他の線形単位でもOK！
/// スケール計算で小数が出るから整数型だと困るんだ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// レイアウト対象のビューポート (描画領域) だよ。
///
/// 幅と高さはどちらも正であることを `new` で保証する。
/// 一度作ったら変更しない。リサイズされたら作り直してレイアウトも計算し直す！
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// ビューポートを作る。幅か高さが 0 以下なら `InvalidViewport` を返すよ。
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        if width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(LayoutError::InvalidViewport { width, height })
        }
    }
}

/// 左上座標とサイズで表す矩形。当たり判定と重なりチェックに使う。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// 点 (px, py) がこの矩形の中にあるかチェックする関数。
    /// 左端と上端は含み、右端と下端は含まない半開区間だよ。
    /// 隣り合う矩形が 1 ピクセルを取り合わないようにするため！
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// 他の矩形と重なっているかチェックする関数。辺や角が触れるだけなら重なりではない。
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// 矩形の中心座標を返すよ。ターゲット線の端点に使う。
    pub fn center(&self) -> Position {
        Position {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_viewport() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.width, 800.0);
        assert_eq!(vp.height, 600.0);

        // 0 以下の寸法は作れないはず！
        assert!(Viewport::new(0.0, 600.0).is_err(), "幅 0 は不正なはず");
        assert!(Viewport::new(800.0, -1.0).is_err(), "負の高さは不正なはず");
        println!("Viewport 作成テスト、成功！🎉");
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0), "左上の角は含むはず");
        assert!(rect.contains(109.9, 69.9));
        assert!(!rect.contains(110.0, 20.0), "右端は含まないはず");
        assert!(!rect.contains(10.0, 70.0), "下端は含まないはず");
        assert!(!rect.contains(9.9, 20.0));
    }

    #[test]
    fn rect_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let c = Rect::new(100.0, 0.0, 50.0, 50.0); // a の右辺に接しているだけ
        let d = Rect::new(200.0, 200.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c), "辺が接するだけなら重なりではないはず");
        assert!(!a.intersects(&d));
    }

    #[test]
    fn rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let center = rect.center();
        assert_eq!(center, Position { x: 60.0, y: 45.0 });
    }
}
