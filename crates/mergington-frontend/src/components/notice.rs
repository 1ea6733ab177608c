use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown after a signup or unregister attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let classes = match notice.kind {
        NoticeKind::Success => "mt-4 p-4 bg-green-100 text-green-800 rounded",
        NoticeKind::Error => "mt-4 p-4 bg-red-100 text-red-700 rounded",
    };

    html! {
        <div class={classes} role="status">
            <p>{ &notice.text }</p>
        </div>
    }
}
