use crate::models::response::ListKind;
use crate::models::shapes::{ListItem, ListItemStatus};

const MESSAGE_AVATAR: &str = "https://gw.alipayobjects.com/zos/rmsportal/ThXAXghbEsBCCSDihZxY.png";

fn entry(avatar: &str, title: &str, datetime: &str, description: &str) -> ListItem {
    ListItem {
        avatar: Some(avatar.to_string()),
        title: title.to_string(),
        datetime: Some(datetime.to_string()),
        description: Some(description.to_string()),
        ..Default::default()
    }
}

fn todo(title: &str, description: &str, extra: &str, status: ListItemStatus) -> ListItem {
    ListItem {
        title: title.to_string(),
        description: Some(description.to_string()),
        extra: Some(extra.to_string()),
        status: Some(status),
        ..Default::default()
    }
}

pub fn notify_items() -> Vec<ListItem> {
    vec![
        entry("", "2025年新的启程", "2025年1月1日", "新年快乐，新的一年好好努力啊！"),
        entry(
            "",
            "CiliKube 上线啦",
            "2025年5月1日",
            "一个免费开源的k8s管理系统基础解决方案，前后端分离、均采用最新的技术栈",
        ),
        entry(
            "",
            "新版本发布",
            "2025年6月1日",
            "期待已久的v1.0版本终于发布了，感谢大家的支持！",
        ),
    ]
}

pub fn message_items() -> Vec<ListItem> {
    vec![
        entry(
            MESSAGE_AVATAR,
            "打工人早安",
            "2025-1-1",
            "今天搬砖不狠，明天地位不稳，早安，打工人",
        ),
        entry(
            MESSAGE_AVATAR,
            "打工人午安",
            "2025-6-1",
            "今天搬砖不狠，明天地位不稳，午安，打工人",
        ),
        entry(
            MESSAGE_AVATAR,
            "打工人晚安",
            "2025-12-1",
            "今天搬砖不狠，明天地位不稳，晚安，打工人",
        ),
    ]
}

pub fn todo_items() -> Vec<ListItem> {
    vec![
        todo("任务一", "关注希里安公众号", "未开始", ListItemStatus::Info),
        todo("任务二", "添加项目团队微信ciliverse", "进行中", ListItemStatus::Info),
        todo("任务三", "加希里安技术交流群吹牛", "已超时", ListItemStatus::Danger),
    ]
}

pub fn list_items(kind: ListKind) -> Vec<ListItem> {
    match kind {
        ListKind::Notify => notify_items(),
        ListKind::Messages => message_items(),
        ListKind::Todos => todo_items(),
    }
}
