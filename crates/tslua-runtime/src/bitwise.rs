//! Bitwise helpers for Lua 5.1, which lacks native bitwise operators.
//! Published as a `bit` table so generated `bit.band`/`bit.bor` calls
//! resolve on any 5.x interpreter.

pub const BIT_LIBRARY: &str = r#"bit = bit or {}

function bit.band(a, b)
    local result = 0
    local bitval = 1
    while a > 0 and b > 0 do
        if a % 2 == 1 and b % 2 == 1 then
            result = result + bitval
        end
        bitval = bitval * 2
        a = math.floor(a / 2)
        b = math.floor(b / 2)
    end
    return result
end

function bit.bor(a, b)
    local result = 0
    local bitval = 1
    while a > 0 or b > 0 do
        if a % 2 == 1 or b % 2 == 1 then
            result = result + bitval
        end
        bitval = bitval * 2
        a = math.floor(a / 2)
        b = math.floor(b / 2)
    end
    return result
end
"#;
