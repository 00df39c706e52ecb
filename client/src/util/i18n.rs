//! Static translation table for page chrome.
//!
//! DESIGN
//! ======
//! Keys are an enum so every locale must cover every string at compile time.
//! SSR always renders English; the hydrated app switches to the browser
//! language after mount so hydration markup matches.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    FriendsTitle,
    FriendsLeft,
    ReviewWaiting,
    ReviewRejected,
    ReviewAccepted,
    MyApply,
    FriendsCreate,
    FriendsApply,
    SiteName,
    Description,
    AvatarUrl,
    Url,
    CreateTitle,
    CreateSuccess,
    DeleteTitle,
    DeleteConfirm,
    DeleteSuccess,
    UpdateSuccess,
    Save,
    Status,
    SortOrder,
    Settings,
    Loading,
    Confirm,
    Cancel,
    Close,
    CertificateExpired,
    Unreachable,
}

impl Key {
    pub const ALL: [Key; 28] = [
        Key::FriendsTitle,
        Key::FriendsLeft,
        Key::ReviewWaiting,
        Key::ReviewRejected,
        Key::ReviewAccepted,
        Key::MyApply,
        Key::FriendsCreate,
        Key::FriendsApply,
        Key::SiteName,
        Key::Description,
        Key::AvatarUrl,
        Key::Url,
        Key::CreateTitle,
        Key::CreateSuccess,
        Key::DeleteTitle,
        Key::DeleteConfirm,
        Key::DeleteSuccess,
        Key::UpdateSuccess,
        Key::Save,
        Key::Status,
        Key::SortOrder,
        Key::Settings,
        Key::Loading,
        Key::Confirm,
        Key::Cancel,
        Key::Close,
        Key::CertificateExpired,
        Key::Unreachable,
    ];
}

impl Locale {
    /// Map a BCP 47 language tag (e.g. `navigator.language`) to a locale.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") { Locale::Zh } else { Locale::En }
    }

    /// Browser language, or English outside the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or(Locale::En, |tag| Locale::from_language_tag(&tag))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Locale::En
        }
    }

    pub fn t(self, key: Key) -> &'static str {
        match self {
            Locale::En => en(key),
            Locale::Zh => zh(key),
        }
    }

    /// Accessible label for the edit modal of `name`.
    pub fn update_label(self, name: &str) -> String {
        match self {
            Locale::En => format!("Update {name}"),
            Locale::Zh => format!("修改 {name}"),
        }
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::FriendsTitle => "Friends",
        Key::FriendsLeft => "Lost contact",
        Key::ReviewWaiting => "Waiting for review",
        Key::ReviewRejected => "Rejected",
        Key::ReviewAccepted => "Accepted",
        Key::MyApply => "My application",
        Key::FriendsCreate => "Create friend link",
        Key::FriendsApply => "Apply for a friend link",
        Key::SiteName => "Site name",
        Key::Description => "Description",
        Key::AvatarUrl => "Avatar URL",
        Key::Url => "URL",
        Key::CreateTitle => "Create",
        Key::CreateSuccess => "Created successfully",
        Key::DeleteTitle => "Delete",
        Key::DeleteConfirm => "Are you sure you want to delete it?",
        Key::DeleteSuccess => "Deleted successfully",
        Key::UpdateSuccess => "Updated successfully",
        Key::Save => "Save",
        Key::Status => "Status",
        Key::SortOrder => "Sort order",
        Key::Settings => "Settings",
        Key::Loading => "Loading...",
        Key::Confirm => "Confirm",
        Key::Cancel => "Cancel",
        Key::Close => "OK",
        Key::CertificateExpired => "Certificate expired",
        Key::Unreachable => "Unreachable",
    }
}

fn zh(key: Key) -> &'static str {
    match key {
        Key::FriendsTitle => "朋友们",
        Key::FriendsLeft => "已失联",
        Key::ReviewWaiting => "等待审核",
        Key::ReviewRejected => "已拒绝",
        Key::ReviewAccepted => "已通过",
        Key::MyApply => "我的申请",
        Key::FriendsCreate => "创建友链",
        Key::FriendsApply => "申请友链",
        Key::SiteName => "站点名称",
        Key::Description => "描述",
        Key::AvatarUrl => "头像地址",
        Key::Url => "地址",
        Key::CreateTitle => "创建",
        Key::CreateSuccess => "创建成功",
        Key::DeleteTitle => "删除",
        Key::DeleteConfirm => "确定要删除吗？",
        Key::DeleteSuccess => "删除成功",
        Key::UpdateSuccess => "更新成功",
        Key::Save => "保存",
        Key::Status => "状态",
        Key::SortOrder => "排序",
        Key::Settings => "设置",
        Key::Loading => "加载中...",
        Key::Confirm => "确定",
        Key::Cancel => "取消",
        Key::Close => "好的",
        Key::CertificateExpired => "证书已过期",
        Key::Unreachable => "无法访问",
    }
}
