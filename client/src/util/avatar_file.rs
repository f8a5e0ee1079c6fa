//! Browser glue for the avatar file input and its object URL.
//!
//! Reads the picked `File` off an input change event, describes it as
//! [`AvatarMeta`], and creates/revokes the `blob:` URL the ticket page uses
//! as its image source.
//!
//! TRADE-OFFS
//! ==========
//! Everything touching `web_sys` is hydrate-only. SSR and native tests get
//! no-op fallbacks so pages render deterministically on the server.

#[cfg(test)]
#[path = "avatar_file_test.rs"]
mod avatar_file_test;

use crate::state::registration::AvatarMeta;

/// Describe a browser file. Sizes above `u64::MAX` cannot occur in practice.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn describe(file: &web_sys::File) -> AvatarMeta {
    AvatarMeta { name: file.name(), mime_type: file.type_(), size_bytes: file.size().max(0.0) as u64 }
}

/// First file selected in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = leptos::prelude::event_target::<web_sys::HtmlInputElement>(ev);
    input.files()?.get(0)
}

/// Create a `blob:` URL for `file`. Returns `None` if the browser refuses.
#[cfg(feature = "hydrate")]
pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => {
            log::debug!("avatar object url created: {url}");
            Some(url)
        }
        Err(e) => {
            log::warn!("avatar object url creation failed: {e:?}");
            None
        }
    }
}

/// Release a URL previously returned by `create_object_url`.
pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if is_object_url(url) {
            let _ = web_sys::Url::revoke_object_url(url);
            log::debug!("avatar object url revoked: {url}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Whether `url` is a `blob:` URL this module could have created.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Short label for the upload preview, e.g. `me.png (512 KB)`.
pub fn preview_label(meta: &AvatarMeta) -> String {
    format!("{} ({})", meta.name, format_size(meta.size_bytes))
}

/// Human-readable byte count using binary units.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{}.{} MB", bytes / MIB, (bytes % MIB) * 10 / MIB)
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}
