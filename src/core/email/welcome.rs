//! Welcome email sent after a successful signup

use crate::core::email::OutgoingEmail;
use crate::core::waitlist::Placement;

/// Greeting used when the signup carries no name
const FALLBACK_GREETING_NAME: &str = "there";

/// Parameters of the welcome email
#[derive(Debug, Clone)]
pub struct WelcomeEmail<'a> {
    pub name: Option<&'a str>,
    pub placement: Placement,
}

impl<'a> WelcomeEmail<'a> {
    pub fn new(name: Option<&'a str>, placement: Placement) -> Self {
        Self { name, placement }
    }

    pub fn subject(&self) -> String {
        if self.placement.early_bird {
            format!(
                "🎉 You're #{} on the TaxMate Waitlist!",
                self.placement.position
            )
        } else {
            "🎉 Welcome to TaxMate Waitlist!".to_string()
        }
    }

    pub fn html(&self) -> String {
        let Placement {
            position,
            early_bird,
            spots_left,
        } = self.placement;

        let greeting = escape_html(
            self.name
                .filter(|n| !n.is_empty())
                .unwrap_or(FALLBACK_GREETING_NAME),
        );

        let standing = if early_bird {
            format!("You're #{} on the early access list", position)
        } else {
            format!("You're on the waitlist ({} total members)", position)
        };

        let early_bird_badge = if early_bird {
            format!(
                r#"<div style="background: #10B981; border-radius: 12px; padding: 16px; text-align: center; margin-bottom: 24px;">
                    <p style="color: white; font-size: 16px; font-weight: 700; margin: 0;">🎊 EARLY BIRD SPECIAL</p>
                    <p style="color: white; font-size: 14px; margin: 8px 0 0 0;">Only {} spots left for lifetime access!</p>
                </div>"#,
                spots_left
            )
        } else {
            String::new()
        };

        format!(
            r#"
            <div style="font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 600px; margin: 0 auto; padding: 40px 20px;">
                <div style="text-align: center; margin-bottom: 40px;">
                    <h1 style="color: #3B82F6; font-size: 32px; font-weight: 800; margin: 0 0 10px 0;">🎉 Welcome to TaxMate!</h1>
                    <p style="color: #6B7280; font-size: 16px; margin: 0;">{standing}</p>
                </div>
                {early_bird_badge}
                <div style="background: white; border-radius: 16px; padding: 32px;">
                    <p style="color: #111827; font-size: 16px; margin: 0 0 16px 0;">Hey {greeting} 👋</p>
                    <p style="color: #4B5563; font-size: 16px; margin: 0 0 16px 0;">
                        Thanks for joining! We're building TaxMate to help freelancers create professional invoices in seconds.
                        We'll send you updates as we build and let you know the moment we launch.
                    </p>
                </div>
                <div style="text-align: center; padding: 20px 0;">
                    <p style="color: #9CA3AF; font-size: 13px; margin: 0;">The TaxMate Team</p>
                </div>
            </div>
            "#
        )
    }

    /// Render into a message addressed to `to`
    pub fn render(&self, to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            subject: self.subject(),
            html: self.html(),
        }
    }
}

/// Escape text for interpolation into HTML
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
