//! 健康邻居查询

use crate::topo::{Direction, FatTreeTopology, Switch};

/// 经由 `direction` 方向且未失效的链路可达的邻居交换机（按链路顺序）。
///
/// 纯查询；所有匹配链路都失效或根本没有该方向的链路时返回空列表。
pub fn healthy_neighbors<'a>(
    topo: &'a FatTreeTopology,
    switch: &Switch,
    direction: Direction,
) -> Vec<&'a Switch> {
    switch
        .links()
        .iter()
        .filter(|l| l.direction == direction && l.is_healthy())
        .filter_map(|l| topo.switch(l.other_end).ok())
        .collect()
}
