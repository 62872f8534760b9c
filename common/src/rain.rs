//! マトリックスレイン（落下する文字列）のシミュレーション
//!
//! 描画はWeb側が担当する。ここでは列ごとの落下位置と
//! 1ティックで描く文字の座標だけを計算する。

/// 描画に使う文字セット
pub const GLYPHS: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズヅブプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロゴゾドボポ0123456789";

/// 文字サイズ（px）。列幅と行の高さも兼ねる
pub const FONT_SIZE: f64 = 14.0;

/// ティック間隔（ms）
pub const TICK_MS: u32 = 35;

/// 残像を作る半透明の塗りつぶし色
pub const FADE_STYLE: &str = "rgba(2,11,6,0.08)";

/// 文字色
pub const GLYPH_STYLE: &str = "#0f0";

/// 画面下端を越えた列が先頭に戻る乱数しきい値
pub const RESET_THRESHOLD: f64 = 0.975;

/// 1ティックで描く1文字
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// 列ごとの落下状態
#[derive(Debug, Clone)]
pub struct RainField {
    glyphs: Vec<char>,
    drops: Vec<u32>,
    width: f64,
    height: f64,
}

impl RainField {
    pub fn new(width: f64, height: f64) -> Self {
        let mut field = Self {
            glyphs: GLYPHS.chars().collect(),
            drops: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        field.resize(width, height);
        field
    }

    fn column_count(width: f64) -> usize {
        if width.is_finite() && width > 0.0 {
            (width / FONT_SIZE).floor() as usize
        } else {
            0
        }
    }

    /// サイズ変更。列数を新しい幅に合わせ、追加列は先頭から始める
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.drops.resize(Self::column_count(width), 1);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    fn pick(&self, r: f64) -> char {
        let len = self.glyphs.len();
        let index = ((r.clamp(0.0, 1.0) * len as f64).floor() as usize).min(len - 1);
        self.glyphs[index]
    }

    /// 1ティック進める
    ///
    /// `random`は[0, 1)の乱数。各列で文字選択に1回、
    /// 下端を越えた列のみリセット判定にもう1回呼ばれる。
    pub fn tick<R>(&mut self, mut random: R) -> Vec<Glyph>
    where
        R: FnMut() -> f64,
    {
        let mut frame = Vec::with_capacity(self.drops.len());

        for i in 0..self.drops.len() {
            let row = self.drops[i];
            let y = f64::from(row) * FONT_SIZE;
            frame.push(Glyph {
                ch: self.pick(random()),
                x: i as f64 * FONT_SIZE,
                y,
            });

            if y > self.height && random() > RESET_THRESHOLD {
                self.drops[i] = 0;
            }
            self.drops[i] += 1;
        }

        frame
    }
}
