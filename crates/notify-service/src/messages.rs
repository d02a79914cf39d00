//! 通知消息模板

use chrono::Utc;
use database::{Review, MAX_RATING};
use shared_lib::{ContactMessage, Notification, NotificationKind};

/// 星级展示，例如 3 星为 `★★★☆☆`
pub fn star_bar(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// 新评价通知，发给站长用于审核
pub fn review_submitted(operator: &str, review: &Review) -> Notification {
    let body = format!(
        "🌟 New Review Received!\n\n\
         Name: {}\n\
         Position: {}\n\
         Email: {}\n\
         Rating: {} ({}/{})\n\n\
         Review:\n\"{}\"\n\n\
         Submitted at {}. The review will appear on the website after approval.",
        review.name,
        or_placeholder(&review.position, "Not specified"),
        or_placeholder(&review.email, "Not provided"),
        star_bar(review.rating),
        review.rating,
        MAX_RATING,
        review.text,
        review.created_at.to_rfc3339(),
    );

    Notification {
        kind: NotificationKind::ReviewSubmitted,
        to: vec![operator.to_string()],
        reply_to: Some(review.email.clone()).filter(|e| !e.is_empty()),
        subject: format!("New Review Submitted - {} Stars", review.rating),
        body,
        created_at: Utc::now(),
    }
}

/// 联系表单消息
pub fn contact_message(recipients: &[String], contact: &ContactMessage) -> Notification {
    let body = format!(
        "New Contact Form Submission\n\n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\n\
         Message:\n{}\n\n\
         This message was sent from your portfolio website contact form.",
        contact.name, contact.email, contact.subject, contact.message,
    );

    Notification {
        kind: NotificationKind::ContactMessage,
        to: recipients.to_vec(),
        reply_to: Some(contact.email.clone()),
        subject: format!("Portfolio Contact: {}", contact.subject),
        body,
        created_at: Utc::now(),
    }
}
