//! # 像素网格模块
//!
//! 定义容量预测器读取的只读数值网格。网格携带显式的形状向量，
//! 以便在运行时检查“必须是二维”这一前置条件。

use image::GrayImage;
use std::io::{self, ErrorKind};

/// 只读的灰度样本网格，按行主序存储。
///
/// 样本以 `f64` 保存（0-255 范围），形状可以是任意维度；
/// 非二维的网格会被预测器的所有操作拒绝。
#[derive(Debug, Clone)]
pub struct PixelGrid {
    shape: Vec<usize>,
    samples: Vec<f64>,
}

impl PixelGrid {
    /// 根据形状向量和行主序样本构造网格。
    pub fn from_shape_vec(shape: Vec<usize>, samples: Vec<f64>) -> Result<Self, io::Error> {
        let expected: usize = shape.iter().product();
        if expected != samples.len() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "The number of samples does not match the product of the grid shape.",
            ));
        }

        Ok(Self { shape, samples })
    }

    /// 从 `image` 库的 8 位灰度缓冲区构造二维网格。
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();

        Self {
            shape: vec![height as usize, width as usize],
            samples: image.as_raw().iter().map(|&pixel| f64::from(pixel)).collect(),
        }
    }

    /// 网格的形状向量。
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// 网格的维度数。
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// 以 (height, width) 形式返回二维网格的尺寸。
    ///
    /// # Errors
    ///
    /// 如果网格不是严格二维的，返回 `InvalidInput` 错误。
    pub fn dims2(&self) -> Result<(usize, usize), io::Error> {
        match *self.shape.as_slice() {
            [height, width] => Ok((height, width)),
            _ => Err(io::Error::new(
                ErrorKind::InvalidInput,
                "The capacity predictor requires a 2-dimensional grayscale grid.",
            )),
        }
    }

    /// 按行主序读取 (row, col) 处的样本。
    ///
    /// 仅对二维网格有意义；调用方必须先保证坐标位于边界之内。
    pub fn sample(&self, row: usize, col: usize) -> f64 {
        self.samples[row * self.shape[1] + col]
    }
}
