/// “非常平坦”区域的标准差阈值。
/// 当 3x3 邻域的标准差与中心差值同时低于该值时，区域被视为非常平坦。
pub const FLAT_STD_THRESHOLD: f64 = 5.0;

/// “非常平坦”区域的中心差值阈值。
pub const FLAT_DIFF_THRESHOLD: f64 = 5.0;

/// “非常平坦”区域允许嵌入的最大位数。
pub const FLAT_MAX_BITS: i32 = 1;

/// “较为平坦”区域的标准差阈值。
pub const MODERATE_STD_THRESHOLD: f64 = 10.0;

/// “较为平坦”区域的中心差值阈值。
pub const MODERATE_DIFF_THRESHOLD: f64 = 10.0;

/// “较为平坦”区域允许嵌入的最大位数。
pub const MODERATE_MAX_BITS: i32 = 2;

/// 命令行默认的每像素请求位数。
/// 纹理充足的区域通常最多使用 3 bits，与常见 LSB+ 编码器的上限一致。
pub const DEFAULT_REQUESTED_BITS: i32 = 3;
