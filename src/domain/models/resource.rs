//! Static catalogue of wellbeing resources.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub snippet: &'static str,
    /// Markdown body
    pub content: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_COUNSELLING: &str = "Counselling FAQs";
pub const CATEGORY_SELF_HELP: &str = "Self-Help";
pub const CATEGORY_CRISIS: &str = "Crisis Support";
pub const CATEGORY_COUNSELLORS_CORNER: &str = "Counsellors Corner";
pub const CATEGORY_UNI_EVENTS: &str = "Uni Events & Resources";
pub const CATEGORY_BLOG: &str = "Mental Health Blog";
pub const CATEGORY_CHATBOT: &str = "Chatbot FAQs";

pub fn resource_catalog() -> &'static [ResourceEntry] {
    RESOURCES
}

pub fn find_resource(id: &str) -> Option<&'static ResourceEntry> {
    RESOURCES.iter().find(|r| r.id == id)
}

static RESOURCES: &[ResourceEntry] = &[
    ResourceEntry {
        id: "faq-counselling-what-is",
        title: "What is Counselling?",
        category: CATEGORY_COUNSELLING,
        snippet: "Learn about counselling as a talking therapy providing a safe space.",
        content: r#"## What is Counselling?

Counselling is a talking therapy that provides a safe and confidential space for you to talk to a trained professional (Counsellor or Therapist) about any issues and concerns.

Sometimes it can be helpful to have someone independent to listen and support, to help you make sense of your situation and find your own answers.

Counselling is a common service that many people will use throughout their lives, not just those with a formally diagnosed mental illness.

**Further Reading:** [BACP – What is Counselling](https://www.bacp.co.uk/about-therapy/what-is-counselling/)"#,
        keywords: &["counselling", "therapy", "talking therapy", "support", "professional help"],
    },
    ResourceEntry {
        id: "faq-counselling-eligibility",
        title: "Am I Eligible for Uni Counselling?",
        category: CATEGORY_COUNSELLING,
        snippet: "Find out who can access the free UON Counselling Service.",
        content: r#"## Am I eligible for Counselling?

We accept students from any level of studies, from foundation through to PhD. You must be enrolled, have a student ID number and UON student email address.

**When am I not eligible?**
*   If you are not enrolled at the University.
*   If you are already receiving counselling or therapy elsewhere (you can still use drop-ins).
*   If you are residing outside the UK.

**Cost:** The UON Counselling Service is **free**."#,
        keywords: &["counselling", "eligibility", "cost", "free", "enrolled", "abroad", "drop-in", "uon", "university"],
    },
    ResourceEntry {
        id: "faq-counselling-what-to-expect",
        title: "What Happens in a Counselling Session?",
        category: CATEGORY_COUNSELLING,
        snippet: "Learn about the process of a typical counselling session.",
        content: r#"## What happens in a Counselling Session?

Typically, you'll have an initial consultation to discuss your needs and goals. Subsequent sessions involve talking through your thoughts and feelings with the counsellor, who will listen without judgment.

**Confidentiality:** Sessions are confidential, except in specific circumstances involving risk of harm.

**Duration:** Sessions usually last 50 minutes.

**Frequency:** This varies depending on your needs, often weekly or bi-weekly."#,
        keywords: &["counselling", "session", "process", "confidentiality", "duration", "frequency"],
    },
    ResourceEntry {
        id: "faq-counselling-how-to-register",
        title: "How Do I Register for Counselling?",
        category: CATEGORY_COUNSELLING,
        snippet: "Steps to register for the University Counselling Service.",
        content: r#"## How Do I Register for Counselling?

1.  **Complete the Online Form** on the University's Counselling Service webpage.
2.  **Wait for Contact** via your university email.
3.  **Attend Consultation** to discuss your needs.

**Waiting Times:** There might be a waiting list, especially during busy periods."#,
        keywords: &["counselling", "register", "sign up", "form", "consultation", "waiting list"],
    },
    ResourceEntry {
        id: "faq-counselling-types",
        title: "What Types of Counselling are Offered?",
        category: CATEGORY_COUNSELLING,
        snippet: "Overview of different counselling approaches available.",
        content: r#"## What Types of Counselling are Offered?

*   **Person-Centred Therapy:** Focuses on your self-discovery and growth.
*   **Cognitive Behavioural Therapy (CBT):** Helps identify and change negative thought patterns.
*   **Psychodynamic Therapy:** Explores how past experiences influence present feelings.
*   **Integrative Therapy:** Combines elements from different approaches."#,
        keywords: &["counselling", "types", "approaches", "cbt", "person-centred", "psychodynamic", "integrative"],
    },
    ResourceEntry {
        id: "selfhelp-anxiety-panic",
        title: "Managing Anxiety & Panic Attacks",
        category: CATEGORY_SELF_HELP,
        snippet: "Understanding anxiety/panic and practical coping strategies.",
        content: r#"## Understanding Anxiety & Panic

*   **Anxiety:** A normal feeling in difficult situations, but can become overwhelming.
*   **Panic Attack:** Intense physical/mental symptoms (sweating, racing heart, fear).

## Ways to Manage

*   **Rest:** Avoid getting over-tired; take regular breaks.
*   **Breathing:** Slow down breathing (in for 4, out for 6).
*   **Acceptance:** Remember anxiety feelings are normal and will pass.

## External Resources

*   **NHS:** [Every Mind Matters - Anxiety](https://www.nhs.uk/every-mind-matters/mental-health-issues/anxiety/)
*   **No Panic:** [Website & Helpline](https://www.nopanic.org.uk/)"#,
        keywords: &["anxiety", "panic attack", "stress", "breathing exercise", "coping", "self-help", "exams", "worry"],
    },
    ResourceEntry {
        id: "selfhelp-low-mood-depression",
        title: "Understanding Low Mood & Depression",
        category: CATEGORY_SELF_HELP,
        snippet: "Recognising symptoms and finding ways to cope with low mood or depression.",
        content: r#"## Understanding Low Mood & Depression

*   **Low Mood:** Feeling sad, worried, or fed up. Usually passes in time.
*   **Depression:** More intense, longer-lasting low mood impacting daily life.

## Ways to Manage

*   **Talk:** Share feelings with trusted friends, family, or professionals.
*   **Stay Active:** Exercise can boost mood.
*   **Routine:** Maintain a regular sleep schedule and daily structure.
*   **Small Goals:** Set achievable daily tasks.

## External Resources

*   **MIND:** [Information on Depression](https://www.mind.org.uk/information-support/types-of-mental-health-problems/depression/about-depression/)"#,
        keywords: &["depression", "low mood", "sadness", "hopelessness", "coping", "self-help", "mental health", "exercise", "routine"],
    },
    ResourceEntry {
        id: "selfhelp-sleep",
        title: "Improving Your Sleep",
        category: CATEGORY_SELF_HELP,
        snippet: "Tips and resources for better sleep hygiene and managing sleep problems.",
        content: r#"## Tips for Better Sleep

*   **Consistent Schedule:** Go to bed and wake up around the same time daily.
*   **Relaxing Routine:** Wind down before bed. Avoid screens.
*   **Optimize Environment:** Dark, quiet, cool bedroom.
*   **Avoid Stimulants:** Limit caffeine and nicotine in the evening.
*   **Get Up if You Can't Sleep:** If awake for >20 mins, do something relaxing.

**The Sleep Charity:** [Website & Advice](https://thesleepcharity.org.uk/)"#,
        keywords: &["sleep", "insomnia", "sleep hygiene", "rest", "schedule", "routine", "relaxation", "self-help"],
    },
    ResourceEntry {
        id: "selfhelp-stress",
        title: "Managing Stress",
        category: CATEGORY_SELF_HELP,
        snippet: "Understanding stress and practical techniques for coping.",
        content: r#"## Ways to Manage Stress

*   **Identify Triggers:** Recognise what situations or thoughts cause stress.
*   **Time Management:** Prioritise tasks, break them down, learn to say no.
*   **Relaxation Techniques:** Deep breathing, mindfulness, meditation, or yoga.
*   **Physical Activity:** Regular exercise is a great stress reliever.
*   **Talk About It:** Share feelings with friends, family, or a professional.

**NHS:** [Every Mind Matters - Stress](https://www.nhs.uk/every-mind-matters/mental-health-issues/stress/)"#,
        keywords: &["stress", "pressure", "coping", "management", "relaxation", "time management", "mindfulness", "self-help", "wellbeing"],
    },
    ResourceEntry {
        id: "crisis-support-immediate-help",
        title: "Need Help in a Crisis?",
        category: CATEGORY_CRISIS,
        snippet: "Urgent support contacts for mental health crises.",
        content: r#"## Immediate Help Needed?

**If you or someone else is in immediate danger, call 999 (UK).**

This chatbot cannot provide crisis intervention. Please reach out to professional services immediately.

## Urgent Support Contacts (UK)

*   **NHS Mental Health Hub (Northamptonshire - 24/7):** 0800 448 0828
*   **Samaritans (24/7):** Call 116 123
*   **Shout (24/7 Text Service):** Text 'IMATTER' to 85258
*   **NHS 111:** Call 111 if you need urgent medical help but it's not a 999 emergency.
*   **Papyrus HOPELINEUK (Under 35s):** Call 0800 068 4141"#,
        keywords: &["crisis", "urgent help", "emergency", "suicide", "self-harm", "support lines", "nhs", "samaritans", "shout", "papyrus", "hotline", "immediate danger"],
    },
    ResourceEntry {
        id: "counsellor-corner-loneliness",
        title: "Loneliness vs. Being Alone (Nov 2024)",
        category: CATEGORY_COUNSELLORS_CORNER,
        snippet: "Understanding the difference and finding ways to connect.",
        content: r#"## Being Alone vs. Feeling Lonely

*   **Being Alone:** Physical solitude (can be a choice or circumstance).
*   **Feeling Lonely:** Subjective emotional experience, can happen even when surrounded by others.

## Ideas for Bridging the Gap

*   **Practice Self-Compassion:** Be kind to yourself.
*   **Validate & Express Feelings:** Name your emotions. Try journaling.
*   **Stay Connected:** Reach out to friends/family. Join clubs/groups.
*   **Review Social Media Use:** Does it nourish or deplete you?"#,
        keywords: &["loneliness", "alone", "connection", "mindfulness", "self-compassion", "journaling", "social media", "support", "counsellors corner"],
    },
    ResourceEntry {
        id: "counsellor-corner-perfectionism",
        title: "Understanding Perfectionism (Jul 2024)",
        category: CATEGORY_COUNSELLORS_CORNER,
        snippet: "Exploring the impact of perfectionism and strategies for managing it.",
        content: r#"## Understanding Perfectionism

Perfectionism involves setting excessively high standards and being overly critical of oneself.

**Signs:** fear of failure, all-or-nothing thinking, procrastination, excessive checking.

## Strategies

*   **Challenge Perfectionist Thoughts:** Question unrealistic expectations.
*   **Set Realistic Goals:** Focus on progress, not perfection.
*   **Embrace Mistakes as Learning.**
*   **Practice Self-Compassion.**"#,
        keywords: &["perfectionism", "high standards", "self-criticism", "anxiety", "procrastination", "burnout", "self-compassion", "mindfulness", "counsellors corner"],
    },
    ResourceEntry {
        id: "resource-umhd",
        title: "University Mental Health Day",
        category: CATEGORY_UNI_EVENTS,
        snippet: "Information about the annual event promoting student mental health.",
        content: r#"## University Mental Health Day

A national event in Higher Education focusing on raising awareness, challenging stigma, and promoting conversations about student and staff mental health.

**Typical Activities:**
*   Information stalls
*   Therapy animals
*   Wellbeing activities (meditation, crafts, games)
*   Workshops and talks"#,
        keywords: &["university mental health day", "umhd", "event", "awareness", "stigma", "wellbeing", "support", "campus event"],
    },
    ResourceEntry {
        id: "blog-eating-disorder",
        title: "Eating Disorder Awareness & Support (Feb 2025)",
        category: CATEGORY_BLOG,
        snippet: "Recognising signs and finding help for eating disorders.",
        content: r#"## Eating Disorder Awareness

Eating Disorders can be hard to spot and impact anyone.

*   **Think you might have one?** Check [Beat - Do I have an eating disorder?](https://www.beateatingdisorders.org.uk/)

## Beat Helplines
*   England: 0808 801 0677
*   Scotland: 0808 801 0432
*   Wales: 0808 801 0433"#,
        keywords: &["eating disorder", "beat", "support", "helpline", "awareness", "body image", "anorexia", "bulimia", "binge eating", "blog"],
    },
    ResourceEntry {
        id: "blog-spectrum-life",
        title: "Spectrum Life: 24/7 Student Support (Oct 2024)",
        category: CATEGORY_BLOG,
        snippet: "Access free, confidential support anytime via phone, WhatsApp, or online.",
        content: r#"## Spectrum.Life

24/7 access to health and wellbeing resources, additional to existing University support.

*   **24/7 Mental Health Support** via phone or WhatsApp.
*   **Wellbeing Webinars & Workshops.**

**Organisation Code:** UONWELL
**UK Freephone:** 0800 031 8227"#,
        keywords: &["spectrum life", "24/7 support", "helpline", "counselling", "wellbeing", "fitness", "workshops", "confidential", "blog", "uon"],
    },
    ResourceEntry {
        id: "blog-self-care-importance",
        title: "The Importance of Self-Care (May 2024)",
        category: CATEGORY_BLOG,
        snippet: "Understanding what self-care is and why it matters for students.",
        content: r#"## Why Self-Care Matters

Self-care isn't selfish; it's essential for maintaining mental and physical wellbeing.

**Examples:**
*   **Physical:** Sleep, nutritious food, moving your body.
*   **Emotional:** Journaling, talking to a friend, setting boundaries.
*   **Social:** Time with loved ones, joining a club.

Start small. Even 5-10 minutes can make a difference."#,
        keywords: &["self-care", "wellbeing", "mental health", "burnout", "stress management", "relaxation", "hobbies", "boundaries", "blog"],
    },
    ResourceEntry {
        id: "faq-chatbot-capabilities",
        title: "What Can This Chatbot Do?",
        category: CATEGORY_CHATBOT,
        snippet: "Overview of the chatbot's functions and limitations.",
        content: r#"## Chatbot Capabilities

*   Provide information about university mental health resources.
*   Offer general information on common mental health topics.
*   Direct you to relevant self-help materials and support services.
*   Recognise expressions of distress and provide crisis contact information.

**Limitations:**
*   **Not a Therapist:** Cannot provide counselling, diagnosis, or treatment.
*   **Not for Emergencies:** Directs to crisis lines."#,
        keywords: &["chatbot", "capabilities", "functions", "limitations", "faq", "ai", "resources", "support"],
    },
    ResourceEntry {
        id: "faq-chatbot-confidentiality",
        title: "Is My Conversation Confidential?",
        category: CATEGORY_CHATBOT,
        snippet: "Information about the privacy and confidentiality of chatbot interactions.",
        content: r#"## Chatbot Confidentiality & Privacy

*   Chatbot interactions are not confidential in the same way as talking to a human counsellor.
*   Conversations *may* be logged anonymously to improve the service.
*   Logs are not linked to your name or student ID unless you provide it.

**Recommendation:** Avoid sharing highly sensitive personal details."#,
        keywords: &["chatbot", "confidentiality", "privacy", "data", "logging", "anonymised", "security", "faq"],
    },
    ResourceEntry {
        id: "faq-chatbot-crisis",
        title: "Chatbot & Crisis Support Handling",
        category: CATEGORY_CHATBOT,
        snippet: "How the chatbot handles mental health crises and where to get urgent help.",
        content: r#"## Chatbot Role in Crisis

This chatbot **cannot provide immediate crisis intervention or counselling.**

If you ask about crisis or self-harm, it will acknowledge your distress and recommend contacting professional crisis services immediately.

**Refer to the 'Crisis Support' category for a full list of urgent contacts.**"#,
        keywords: &["chatbot", "crisis", "urgent help", "emergency", "suicide", "self-harm", "support lines", "faq", "response"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = resource_catalog().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), resource_catalog().len());
    }

    #[test]
    fn test_find_resource() {
        assert_eq!(find_resource("selfhelp-sleep").map(|r| r.title), Some("Improving Your Sleep"));
        assert!(find_resource("missing").is_none());
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in [
            CATEGORY_COUNSELLING,
            CATEGORY_SELF_HELP,
            CATEGORY_CRISIS,
            CATEGORY_COUNSELLORS_CORNER,
            CATEGORY_UNI_EVENTS,
            CATEGORY_BLOG,
            CATEGORY_CHATBOT,
        ] {
            assert!(resource_catalog().iter().any(|r| r.category == category));
        }
    }
}
