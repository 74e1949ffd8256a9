//! Prompt building functions for MythicMobs generation requests

use crate::domain::value_objects::{GenerationRequest, MobCategory};

const BOSS_SPEC: &str = "BOSS MOBS:
- High HP (1000-10000+)
- Multiple skill phases
- Boss bar enabled
- Complex AI with skill rotations
- Music/sound on spawn
- Special mechanics (invulnerability phases, summons, etc.)
- Epic loot drops";

const BOSS_DUNGEON_SPEC: &str = "BOSS + DUNGEON MOBS:
- Create 1 main boss (high HP, complex skills)
- Create 3-5 supporting mobs (medium HP, simpler skills)
- Mobs should complement the boss theme
- Include miniboss variants
- Coordinated abilities between mobs";

const MINIBOSS_SPEC: &str = "MINI BOSS:
- Medium-high HP (500-2000)
- 3-5 signature abilities
- Boss bar optional
- Challenging but not overwhelming
- Good drops";

const REGULAR_SPEC: &str = "REGULAR MOBS:
- Balanced HP (20-200)
- 1-3 simple abilities
- Suitable for world spawning
- Thematic but not overpowered";

const LIBS_DISGUISES_BLOCK: &str = "LIBSDISGUISES:
- ALWAYS use LibsDisguises for custom appearances
- Use disguise commands in Skills or mob Options
- Choose appropriate disguise types (PLAYER, mob types, or custom models)
- Example: Disguise: ENDER_DRAGON setGlowing true";

const ADVANCED_SKILLS_BLOCK: &str = "ADVANCED SKILLS:
- Use the provided skill templates from the reference files
- Create complex skill combinations and rotations
- Include cooldowns, conditions, and proper targeting
- Use particles, sounds, and visual effects
- Create skill phases for bosses
- Use metaskills for complex behaviors";

const BASIC_SKILLS_BLOCK: &str = "BASIC SKILLS:
- Keep skills simple and straightforward
- Focus on core mechanics only
- Use basic damage, movement, and effects";

const SKILL_MECHANICS_BLOCK: &str = "SKILL MECHANICS TO USE:
- Damage mechanics with proper scaling
- Particle effects for visual feedback
- Sound effects for audio feedback\x20\x20
- Targeters (@Target, @Self, @PIR, @LivingInCone, etc.)
- Conditions (targetwithin, health checks, etc.)
- Delays and timing for skill sequences
- Potion effects, throws, leaps
- Projectiles (shoot, shootfireball, missile)
- Summons for minions or effects";

const ITEMS_BLOCK: &str = "ITEMS:
- Generate custom items with proper stats
- Use vanilla-compatible item options
- Include enchantments and attributes
- Add lore and display names";

const DROPS_BLOCK: &str = "DROPS:
- Create balanced drop tables
- Include exp and item drops
- Use drop conditions where appropriate";

const ITEMS_MARKER_TEMPLATE: &str = "=== ITEMS ===\n[items configuration here]\n";
const DROPS_MARKER_TEMPLATE: &str = "=== DROPS ===\n[drops configuration here]\n";

const REMINDERS_BLOCK: &str = "IMPORTANT:
- Never use localStorage, sessionStorage, or browser storage APIs
- All configs must be complete, no TODOs or placeholders
- Test mentally for syntax errors before responding
- Ensure proper YAML indentation
- Reference the MythicMobs wiki for accurate syntax";

/// Fixed guidance text for a mob category
pub fn category_spec(category: MobCategory) -> &'static str {
    match category {
        MobCategory::Boss => BOSS_SPEC,
        MobCategory::BossDungeon => BOSS_DUNGEON_SPEC,
        MobCategory::Miniboss => MINIBOSS_SPEC,
        MobCategory::Regular => REGULAR_SPEC,
    }
}

/// Build the system prompt: ruleset, category guidance, feature blocks and output format.
///
/// Omitted optional blocks leave their surrounding blank lines in place.
pub fn build_system_prompt(request: &GenerationRequest) -> String {
    let disguises = if request.use_libs_disguises {
        LIBS_DISGUISES_BLOCK
    } else {
        ""
    };
    let skills = if request.advanced_skills {
        ADVANCED_SKILLS_BLOCK
    } else {
        BASIC_SKILLS_BLOCK
    };
    let items = if request.include_items { ITEMS_BLOCK } else { "" };
    let drops = if request.include_drops { DROPS_BLOCK } else { "" };
    let items_marker = if request.include_items {
        ITEMS_MARKER_TEMPLATE
    } else {
        ""
    };
    let drops_marker = if request.include_drops {
        DROPS_MARKER_TEMPLATE
    } else {
        ""
    };

    let mut prompt = String::new();

    // Role and ruleset
    prompt.push_str("You are an expert MythicMobs configuration generator for Minecraft. Your task is to create high-quality, balanced, and creative mob configurations based on user requests.\n\n");
    prompt.push_str("CRITICAL RULES:\n");
    prompt.push_str("1. Generate ONLY valid YAML syntax following MythicMobs wiki standards\n");
    prompt.push_str("2. All configurations must be production-ready and bug-free\n");
    prompt.push_str("3. Use proper indentation (2 spaces per level)\n");
    prompt.push_str("4. Include comments to explain complex mechanics\n");
    prompt.push_str(&format!(
        "5. Balance the mob appropriately for the category ({})\n",
        request.category
    ));
    prompt.push_str("6. Never use placeholder values - everything must be complete and functional\n\n");

    prompt.push_str(&format!(
        "CATEGORY SPECIFICATIONS:\n{}\n\n",
        category_spec(request.category_kind())
    ));

    prompt.push_str(&format!("{}\n\n", disguises));
    prompt.push_str(&format!("{}\n\n", skills));
    prompt.push_str(&format!("{}\n\n", SKILL_MECHANICS_BLOCK));
    prompt.push_str(&format!("{}\n\n", items));
    prompt.push_str(&format!("{}\n\n", drops));

    // Output format the response parser relies on
    prompt.push_str("OUTPUT FORMAT:\n");
    prompt.push_str("Return your response in this exact format:\n\n");
    prompt.push_str("=== MOBS ===\n[mob configuration here]\n\n");
    prompt.push_str("=== SKILLS ===\n[skills configuration here]\n\n");
    prompt.push_str(&format!("{}\n{}\n\n", items_marker, drops_marker));

    prompt.push_str(REMINDERS_BLOCK);

    prompt
}

/// Build the user message carrying the caller's description
pub fn build_user_prompt(request: &GenerationRequest) -> String {
    let mut message = String::new();

    message.push_str("Generate a MythicMobs configuration for the following request:\n\n");
    message.push_str(&format!("CATEGORY: {}\n", request.category));
    message.push_str(&format!("DESCRIPTION: {}\n", request.prompt));

    if let Some(reference) = &request.reference {
        message.push_str(&format!("REFERENCE: Base this on {}\n", reference));
    }

    message.push_str(
        "\nPlease create a complete, production-ready configuration that:
1. Matches the description perfectly
2. Uses appropriate skills from the template library
3. Has balanced stats for the category
4. Includes LibsDisguises configuration
5. Features creative and fun mechanics
6. Is bug-free and ready to use

Generate the configuration now:",
    );

    message
}
