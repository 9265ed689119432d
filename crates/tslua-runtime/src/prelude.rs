//! The `TS_*` helper family. Callbacks receive `(value, index)` with a
//! zero-based index; slice bounds are zero-based and end-exclusive.

pub const PRELUDE: &str = r#"function TS_ITE(cond, when_true, when_false)
    if cond then
        return when_true()
    else
        return when_false()
    end
end

function TS_forEach(arr, fn)
    for i, v in ipairs(arr) do
        fn(v, i - 1)
    end
end

function TS_map(arr, fn)
    local out = {}
    for i, v in ipairs(arr) do
        out[i] = fn(v, i - 1)
    end
    return out
end

function TS_filter(arr, fn)
    local out = {}
    for i, v in ipairs(arr) do
        if fn(v, i - 1) then
            out[#out + 1] = v
        end
    end
    return out
end

function TS_some(arr, fn)
    for i, v in ipairs(arr) do
        if fn(v, i - 1) then
            return true
        end
    end
    return false
end

function TS_every(arr, fn)
    for i, v in ipairs(arr) do
        if not fn(v, i - 1) then
            return false
        end
    end
    return true
end

function TS_slice(arr, first, last)
    local out = {}
    local stop = last or #arr
    for i = first + 1, stop do
        out[#out + 1] = arr[i]
    end
    return out
end
"#;

/// The whole runtime in one string, ready to prepend to generated output.
pub fn full_prelude() -> String {
    let mut out = String::with_capacity(PRELUDE.len() + crate::bitwise::BIT_LIBRARY.len() + 1);
    out.push_str(PRELUDE);
    out.push('\n');
    out.push_str(crate::bitwise::BIT_LIBRARY);
    out
}
