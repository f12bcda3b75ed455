//! # 命令处理逻辑模块
//!
//! 包含处理 `analyze` 和 `map` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用容量预测核心以及向用户报告结果。

use crate::cli::{AnalyzeArgs, MapArgs};
use crate::grid::PixelGrid;
use crate::predictor::capacity_map;
use anyhow::{Context, Result};
use colored::Colorize;
use image::GrayImage;
use std::path::{Path, PathBuf};

/// 处理 'Analyze' 命令的执行逻辑。
///
/// 负责读取图像文件、转换为灰度网格、逐像素计算允许嵌入的位数，
/// 最后向用户打印整幅图像的容量摘要。
///
/// # Arguments
///
/// * `args` - 包含输入路径与请求位数的 `AnalyzeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 核心预测函数 (`capacity_map`) 在执行过程中失败。
pub fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let picture = load_luma(&args.image)?;
    let (width, height) = picture.dimensions();
    let gray = PixelGrid::from_luma(&picture);

    let map = capacity_map(&gray, args.bits).with_context(|| {
        format!(
            "Failed to compute the capacity map for '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let total_bits: u64 = map.iter().map(|&bits| bits as u64).sum();
    let skipped = map.iter().filter(|&&bits| bits == 0).count();
    let full = map.iter().filter(|&&bits| bits == args.bits && bits > 0).count();
    let reduced = map.len() - skipped - full;

    println!(
        "Capacity analysis for: {}",
        args.image.to_string_lossy().green().bold()
    );
    println!("Image size: {} x {} ({} pixels)", width, height, map.len());
    println!("Requested bits per pixel: {}", args.bits);
    println!("Full-capacity pixels: {}", full.to_string().green().bold());
    println!("Reduced-capacity pixels: {}", reduced.to_string().yellow().bold());
    println!("Zero-capacity pixels: {}", skipped.to_string().red().bold());
    println!(
        "Total embeddable: {} bits ({} bytes)",
        total_bits.to_string().green().bold(),
        total_bits / 8
    );

    Ok(())
}

/// 处理 'Map' 命令的执行逻辑。
///
/// 负责读取图像文件、逐像素计算允许嵌入的位数、把位数线性缩放到 0-255，
/// 最后将得到的灰度容量图写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、请求位数与覆盖开关的 `MapArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 核心预测函数 (`capacity_map`) 在执行过程中失败。
/// * 无法写入到目标图像文件。
pub fn handle_map(args: MapArgs) -> Result<()> {
    let picture = load_luma(&args.image)?;
    let (width, height) = picture.dimensions();
    let gray = PixelGrid::from_luma(&picture);

    let dest = args.dest.unwrap_or_else(|| default_map_path(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let map = capacity_map(&gray, args.bits).with_context(|| {
        format!(
            "Failed to compute the capacity map for '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    // 将允许位数线性缩放到 0-255，便于肉眼查看平坦与纹理区域。
    let max_bits = args.bits.max(1) as u32;
    let pixels: Vec<u8> = map
        .iter()
        .map(|&bits| ((bits.max(0) as u32 * 255) / max_bits).min(255) as u8)
        .collect();

    let map_image = GrayImage::from_raw(width, height, pixels)
        .context("Failed to assemble the capacity map image buffer.")?;

    map_image.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The capacity map has been successfully saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 读取图像文件并转换为 8 位灰度缓冲区。
fn load_luma(path: &Path) -> Result<GrayImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(picture.to_luma8())
}

/// 在输入文件旁生成默认的容量图输出路径：capacity_<名称>.png。
fn default_map_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    image.with_file_name(format!("capacity_{stem}.png"))
}
