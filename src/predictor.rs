//! # 噪声预测模块
//!
//! 对单个像素做预测性噪声修正：平坦、低方差的区域容易暴露嵌入痕迹，
//! 其容量会被压缩；纹理丰富的区域足以掩盖嵌入噪声，保留请求的位数。

use crate::constants::{
    FLAT_DIFF_THRESHOLD, FLAT_MAX_BITS, FLAT_STD_THRESHOLD, MODERATE_DIFF_THRESHOLD,
    MODERATE_MAX_BITS, MODERATE_STD_THRESHOLD,
};
use crate::grid::PixelGrid;
use std::io;

/// 计算单个像素允许嵌入的位数。
///
/// 以 (row, col) 为中心取裁剪到边界内的 3x3 窗口，在完整窗口（含中心像素）
/// 上计算均值与总体标准差，再按阈值判定区域的平坦程度。
/// 返回值始终落在 `[0, max(requested_bits, 0)]` 之间；相同输入必然得到相同输出。
///
/// # Arguments
///
/// * `gray` - 二维灰度网格。
/// * `row`, `col` - 目标像素坐标，允许越界（越界时容量为 0）。
/// * `requested_bits` - 编码器希望在该像素嵌入的位数。
///
/// # Errors
///
/// 当 `gray` 不是二维网格时，返回 `InvalidInput` 错误。
pub fn adjust_capacity(
    gray: &PixelGrid,
    row: i64,
    col: i64,
    requested_bits: i32,
) -> Result<i32, io::Error> {
    if requested_bits <= 0 {
        return Ok(0);
    }

    let (height, width) = gray.dims2()?;

    // 越界像素的容量为 0，属于安全回退而非错误。
    if row < 0 || col < 0 || row as usize >= height || col as usize >= width {
        return Ok(0);
    }
    let (row, col) = (row as usize, col as usize);

    // 以 (row, col) 为中心、裁剪到边界内的 3x3 窗口。
    let y0 = row.saturating_sub(1);
    let y1 = (row + 2).min(height);
    let x0 = col.saturating_sub(1);
    let x1 = (col + 2).min(width);

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    let mut count = 0usize;

    for iy in y0..y1 {
        for ix in x0..x1 {
            let value = gray.sample(iy, ix);
            sum += value;
            sum_sq += value * value;
            count += 1;
        }
    }

    // 窗口只含一个样本，说明整幅图像就是 1x1。
    if count <= 1 {
        return Ok(requested_bits.min(1));
    }

    let mean = sum / count as f64;
    let variance = (sum_sq / count as f64) - mean * mean;
    let std_dev = variance.max(0.0).sqrt();
    let diff = (gray.sample(row, col) - mean).abs();

    // 非常平坦：最多 1 bit。
    if std_dev < FLAT_STD_THRESHOLD && diff < FLAT_DIFF_THRESHOLD {
        return Ok(requested_bits.min(FLAT_MAX_BITS));
    }

    // 较为平坦：最多 2 bits。
    if std_dev < MODERATE_STD_THRESHOLD && diff < MODERATE_DIFF_THRESHOLD {
        return Ok(requested_bits.min(MODERATE_MAX_BITS));
    }

    // 纹理足以掩盖嵌入噪声。
    Ok(requested_bits)
}

/// 对整幅图像逐像素计算容量图（行主序）。
///
/// # Errors
///
/// 当 `gray` 不是二维网格时，返回 `InvalidInput` 错误。
pub fn capacity_map(gray: &PixelGrid, requested_bits: i32) -> Result<Vec<i32>, io::Error> {
    let (height, width) = gray.dims2()?;
    let mut map = Vec::with_capacity(height * width);

    for row in 0..height {
        for col in 0..width {
            map.push(adjust_capacity(gray, row as i64, col as i64, requested_bits)?);
        }
    }

    Ok(map)
}

/// 整幅图像可嵌入的总位数。
///
/// # Errors
///
/// 当 `gray` 不是二维网格时，返回 `InvalidInput` 错误。
pub fn total_capacity(gray: &PixelGrid, requested_bits: i32) -> Result<u64, io::Error> {
    Ok(capacity_map(gray, requested_bits)?
        .iter()
        .map(|&bits| bits as u64)
        .sum())
}
