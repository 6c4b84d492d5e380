//! 跳棋测试局面库
//!
//! 提供命名的记谱局面，方便测试和调试
//!
//! 命名规范:
//! - START: 初始局面
//! - CAPTURE_n: 吃子测试
//! - PROMO_n: 升变测试
//! - END_n: 终局测试

// =============================================================================
// 开局 (START)
// =============================================================================

/// 初始局面 - A 方在上（第 0-2 行），B 方在下（第 5-7 行），A 先行
pub const START: &str = "1U1U1U1U/U1U1U1U1/1U1U1U1U/8/8/B1B1B1B1/1B1B1B1B/B1B1B1B1 a";

/// A 方第一步 (2,1) -> (3,2) 之后，轮到 B
pub const EARLY_1: &str = "1U1U1U1U/U1U1U1U1/3U1U1U/2U5/8/B1B1B1B1/1B1B1B1B/B1B1B1B1 b";

// =============================================================================
// 吃子 (CAPTURE)
// =============================================================================

/// A 普通子 (2,3) 可跳过 B 普通子 (3,4) 落到 (4,5)
pub const CAPTURE_1: &str = "8/8/3U4/4B3/8/8/8/8 a";

/// B 王 (2,3) 可向后跳吃 A 普通子 (3,4)
pub const CAPTURE_2: &str = "8/8/3Q4/4U3/8/8/8/8 b";

/// A 同时有吃子与普通走法，用于吃子规则测试
pub const CAPTURE_3: &str = "7U/8/3U4/4B3/8/8/8/8 a";

// =============================================================================
// 升变 (PROMO)
// =============================================================================

/// A 普通子 (6,1) 一步到达第 7 行
pub const PROMO_1: &str = "8/8/8/8/8/8/1U6/8 a";

/// B 普通子 (1,2) 一步到达第 0 行，A 王在远处
pub const PROMO_2: &str = "8/2B5/8/8/8/8/8/4K3 b";

// =============================================================================
// 终局 (END)
// =============================================================================

/// A 角上普通子 (0,1) 只能向下走
pub const END_CORNER: &str = "1U6/8/8/8/8/8/8/8 a";

/// 轮到 A，但 A 唯一的棋子在第 7 行无路可走
pub const END_A_BLOCKED: &str = "8/8/8/8/8/2B5/8/U7 a";

/// 轮到 B，但 B 已无棋子
pub const END_B_EMPTY: &str = "8/8/3U4/8/8/8/8/8 b";
